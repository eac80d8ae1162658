//! Runs the drill once and prints the source and result arrays.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sort_drill::{bubble_sort, fill, limit};
use tracing::debug;

const SEED_ENV: &str = "SORT_DRILL_SEED";
const ARRAY_LEN: usize = 30;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match std::env::var(SEED_ENV) {
        Ok(raw) => {
            let seed: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{SEED_ENV} is not a u64: {raw:?}"))?;
            ChaCha8Rng::seed_from_u64(seed)
        }
        Err(_) => ChaCha8Rng::from_entropy(),
    };

    let source = fill(ARRAY_LEN, &mut rng);
    let mut result = limit(&source);
    debug!(kept = result.len(), "Limited source array");
    bubble_sort(&mut result);

    println!("src: {:?}", source);
    println!("res: {:?}", result);

    Ok(())
}

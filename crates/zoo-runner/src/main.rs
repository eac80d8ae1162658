//! Zoo runner: opens the zoo, runs the configured number of days and prints
//! each day's log.

mod telemetry;

use anyhow::Result;
use tokio::signal;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};
use zoo_core::RunConfig;
use zoo_world::Zoo;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = RunConfig::load()?;

    telemetry::init_telemetry(&config.log_filter)?;

    info!(
        seed = ?config.seed,
        num_days = config.num_days,
        tick_interval_ms = config.tick_interval_ms,
        "Starting zoo"
    );

    let mut zoo = Zoo::new(config.seed);
    zoo.seed();
    println!("Zoo opened. {}", zoo.stats());

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let pause = Duration::from_millis(config.tick_interval_ms);

    for day in 1..=config.num_days {
        for line in zoo.tick() {
            println!("{line}");
        }

        // Pause after every day, the last one included
        tokio::select! {
            _ = sleep(pause) => {}
            _ = &mut shutdown => {
                warn!(day, "Stopping early");
                break;
            }
        }
    }

    println!("Summary: {}", zoo.stats());
    info!(days = zoo.day(), "Zoo closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}

//! Configuration types for a simulation run.
//!
//! Only the run itself is configurable (seed, length, pacing, log filter);
//! the simulation rules are fixed constants.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Env var holding the path of a JSON config file
pub const CONFIG_PATH_ENV: &str = "ZOO_CONFIG";
pub const SEED_ENV: &str = "ZOO_SEED";
pub const DAYS_ENV: &str = "ZOO_DAYS";

/// Run configuration for the zoo driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Random seed for reproducibility (entropy when absent)
    pub seed: Option<u64>,
    /// Number of simulated days
    pub num_days: u32,
    /// Pause between days (milliseconds)
    pub tick_interval_ms: u64,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_days: 10,
            tick_interval_ms: 100,
            log_filter: "warn".to_string(),
        }
    }
}

impl RunConfig {
    /// Defaults, then the file named by `ZOO_CONFIG`, then env overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(
            std::env::var(SEED_ENV).ok().as_deref(),
            std::env::var(DAYS_ENV).ok().as_deref(),
        )?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading run config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, seed: Option<&str>, days: Option<&str>) -> Result<()> {
        if let Some(seed) = seed {
            let seed: u64 = seed
                .trim()
                .parse()
                .map_err(|_| Error::Validation(format!("{SEED_ENV} is not a u64: {seed:?}")))?;
            debug!(seed, "Seed overridden from environment");
            self.seed = Some(seed);
        }

        if let Some(days) = days {
            let days: u32 = days
                .trim()
                .parse()
                .map_err(|_| Error::Validation(format!("{DAYS_ENV} is not a u32: {days:?}")))?;
            debug!(days, "Day count overridden from environment");
            self.num_days = days;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_days == 0 {
            return Err(Error::Validation("num_days must be at least 1".to_string()));
        }
        Ok(())
    }
}

//! Population summary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use zoo_core::Species;

/// Snapshot of living and dead counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZooStats {
    /// Animals currently alive
    pub living: usize,
    /// Living animals per species; species with none alive are absent
    pub by_species: BTreeMap<Species, usize>,
    /// Every animal ever created minus the living ones
    pub dead: usize,
}

impl fmt::Display for ZooStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[alive: {}]", self.living)?;
        if !self.by_species.is_empty() {
            let parts: Vec<String> = self
                .by_species
                .iter()
                .map(|(species, count)| format!("{}: {}", species, count))
                .collect();
            write!(f, " {}", parts.join(", "))?;
        }
        write!(f, " | dead: {}", self.dead)
    }
}

//! Log entries produced by a simulated day.

use crate::stats::ZooStats;
use serde::{Deserialize, Serialize};
use std::fmt;
use zoo_core::Species;

/// One line of a day's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZooEvent {
    DayStarted { day: u32 },
    Ate { name: String, species: Species },
    Drank { name: String, species: Species },
    Walked { name: String, species: Species },
    Born { name: String, species: Species },
    Died { name: String, species: Species },
    SadDay,
    Summary(ZooStats),
}

impl fmt::Display for ZooEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZooEvent::DayStarted { day } => write!(f, "=== Day {} ===", day),
            ZooEvent::Ate { name, species } => write!(f, "{} ({}) ate", name, species),
            ZooEvent::Drank { name, species } => write!(f, "{} ({}) drank", name, species),
            ZooEvent::Walked { name, species } => {
                write!(f, "{} ({}) went for a walk", name, species)
            }
            ZooEvent::Born { name, species } => write!(f, "Born {} {}", species, name),
            ZooEvent::Died { name, species } => write!(f, "{} ({}) died", name, species),
            ZooEvent::SadDay => write!(f, "A sad day for the zoo"),
            ZooEvent::Summary(stats) => write!(f, "{}", stats),
        }
    }
}

//! Zoo simulation engine.
//!
//! This module implements the animals, the population that holds them and
//! the per-day tick that ages, feeds, breeds and buries them.

pub mod animal;
pub mod events;
pub mod population;
pub mod simulation;
pub mod stats;

pub use animal::{Activity, Animal};
pub use events::ZooEvent;
pub use population::Population;
pub use simulation::Zoo;
pub use stats::ZooStats;

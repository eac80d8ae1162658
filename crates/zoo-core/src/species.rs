//! Species lookup table.
//!
//! Every animal shares one entity type; the per-species constants live here
//! and are copied onto each animal when it is created.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Fixed per-species parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesTraits {
    /// Hunger and thirst added every day
    pub metabolism: u32,
    /// Daily chance of falling sick, in percent
    pub sickness_chance: u32,
    /// Chance of a successful mating, in percent
    pub reproduction_chance: u32,
    /// Hunger and thirst added by a walk
    pub walk_cost: u32,
}

/// Declared in alphabetical order so the derived `Ord` sorts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Elephant,
    Giraffe,
    Lion,
    Monkey,
    Penguin,
    Zebra,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Elephant,
        Species::Giraffe,
        Species::Lion,
        Species::Monkey,
        Species::Penguin,
        Species::Zebra,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Elephant => "Elephant",
            Species::Giraffe => "Giraffe",
            Species::Lion => "Lion",
            Species::Monkey => "Monkey",
            Species::Penguin => "Penguin",
            Species::Zebra => "Zebra",
        }
    }

    pub fn traits(&self) -> SpeciesTraits {
        let (metabolism, sickness_chance, reproduction_chance, walk_cost) = match self {
            Species::Elephant => (6, 5, 12, 7),
            Species::Giraffe => (7, 6, 14, 8),
            Species::Lion => (9, 7, 18, 10),
            Species::Monkey => (8, 10, 20, 9),
            Species::Penguin => (7, 9, 15, 8),
            Species::Zebra => (8, 8, 16, 9),
        };

        SpeciesTraits {
            metabolism,
            sickness_chance,
            reproduction_chance,
            walk_cost,
        }
    }

    /// Age in days drawn for animals present at opening
    pub fn initial_age_range(&self) -> RangeInclusive<u32> {
        match self {
            Species::Elephant | Species::Giraffe => 1..=20,
            Species::Lion | Species::Penguin => 1..=12,
            Species::Monkey => 1..=18,
            Species::Zebra => 1..=15,
        }
    }

    /// How many animals of this species the zoo opens with
    pub fn seed_count_range(&self) -> RangeInclusive<usize> {
        match self {
            Species::Elephant | Species::Giraffe => 2..=6,
            Species::Lion => 2..=5,
            Species::Monkey | Species::Zebra => 3..=8,
            Species::Penguin => 4..=10,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Core type definitions for the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound shared by hunger, thirst and health
pub const VITAL_MAX: u32 = 100;

/// Roll 1..=100 and succeed when the roll is at or below `chance`.
pub fn percent_roll(rng: &mut impl Rng, chance: u32) -> bool {
    rng.gen_range(1..=100) <= chance
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Hunger, thirst and health of one animal, each kept within `0..=VITAL_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: u32,
    pub thirst: u32,
    pub health: u32,
}

impl Vitals {
    pub fn new(hunger: u32, thirst: u32, health: u32) -> Self {
        Self {
            hunger: hunger.min(VITAL_MAX),
            thirst: thirst.min(VITAL_MAX),
            health: health.min(VITAL_MAX),
        }
    }

    /// Starting vitals for seeded animals and newborns
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            hunger: rng.gen_range(10..=40),
            thirst: rng.gen_range(10..=40),
            health: rng.gen_range(70..=100),
        }
    }

    pub fn raise_hunger(&mut self, amount: u32) {
        self.hunger = (self.hunger + amount).min(VITAL_MAX);
    }

    pub fn lower_hunger(&mut self, amount: u32) {
        self.hunger = self.hunger.saturating_sub(amount);
    }

    pub fn raise_thirst(&mut self, amount: u32) {
        self.thirst = (self.thirst + amount).min(VITAL_MAX);
    }

    pub fn lower_thirst(&mut self, amount: u32) {
        self.thirst = self.thirst.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(VITAL_MAX);
    }

    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Zero health, full hunger or full thirst
    pub fn is_fatal(&self) -> bool {
        self.health == 0 || self.hunger == VITAL_MAX || self.thirst == VITAL_MAX
    }

    pub fn in_bounds(&self) -> bool {
        self.hunger <= VITAL_MAX && self.thirst <= VITAL_MAX && self.health <= VITAL_MAX
    }
}

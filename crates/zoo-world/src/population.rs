//! Population container: every animal ever created plus death bookkeeping.

use crate::animal::Animal;
use crate::events::ZooEvent;
use crate::stats::ZooStats;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};
use zoo_core::{Sex, Species};

/// Redraws allowed for a cub name that is already taken
const CUB_NAME_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct Population {
    animals: Vec<Animal>,
    day: u32,
    announced_dead: HashSet<String>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_animals(animals: Vec<Animal>) -> Self {
        Self {
            animals,
            ..Self::default()
        }
    }

    /// Opening-day population: a random-sized group of each species.
    pub fn seed(&mut self, rng: &mut impl Rng) {
        for species in Species::ALL {
            let count = rng.gen_range(species.seed_count_range());
            for index in 1..=count {
                let sex = Sex::random(rng);
                self.animals.push(Animal::seeded(species, index, sex, rng));
            }
            debug!(species = %species, count, "Seeded species group");
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn advance_day(&mut self) -> u32 {
        self.day += 1;
        self.day
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub(crate) fn animals_mut(&mut self) -> &mut [Animal] {
        &mut self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn living(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(|a| a.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    pub fn dead_count(&self) -> usize {
        self.animals.len() - self.living_count()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    fn name_taken(&self, name: &str) -> bool {
        self.animals.iter().any(|a| a.name == name)
    }

    /// Add a newborn, redrawing its name while it clashes with an existing
    /// one. A clash that survives every redraw is kept.
    pub fn push_newborn(&mut self, mut cub: Animal, rng: &mut impl Rng) -> &Animal {
        let mut attempts = 0;
        while attempts < CUB_NAME_ATTEMPTS && self.name_taken(&cub.name) {
            cub.name = Animal::cub_name(cub.species, rng);
            attempts += 1;
        }
        if self.name_taken(&cub.name) {
            warn!(name = %cub.name, "Duplicate cub name kept");
        }

        self.animals.push(cub);
        &self.animals[self.animals.len() - 1]
    }

    #[cfg(test)]
    pub(crate) fn is_announced(&self, name: &str) -> bool {
        self.announced_dead.contains(name)
    }

    pub fn announced_dead(&self) -> &HashSet<String> {
        &self.announced_dead
    }

    /// One `Died` event for every dead animal not yet announced.
    pub fn announce_deaths(&mut self) -> Vec<ZooEvent> {
        let mut events = Vec::new();
        for animal in self.animals.iter().filter(|a| !a.is_alive()) {
            if self.announced_dead.insert(animal.name.clone()) {
                events.push(ZooEvent::Died {
                    name: animal.name.clone(),
                    species: animal.species,
                });
            }
        }
        events
    }

    pub fn stats(&self) -> ZooStats {
        let mut by_species = BTreeMap::new();
        for animal in self.living() {
            *by_species.entry(animal.species).or_insert(0) += 1;
        }
        let living: usize = by_species.values().sum();

        ZooStats {
            living,
            by_species,
            dead: self.animals.len() - living,
        }
    }
}

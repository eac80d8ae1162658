//! Simulation engine for running the zoo one day at a time.

use crate::animal::{Activity, Animal};
use crate::events::ZooEvent;
use crate::population::Population;
use crate::stats::ZooStats;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};
use zoo_core::{percent_roll, Sex, Species};

/// Chance, in percent, that a paired couple tries to mate on a given day
const MATING_GATE: u32 = 30;

/// The zoo: a population plus the random source that drives it.
pub struct Zoo<R = ChaCha8Rng> {
    population: Population,
    rng: R,
}

impl Zoo<ChaCha8Rng> {
    /// Empty zoo driven by ChaCha8, seeded for reproducibility or from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> Zoo<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            population: Population::new(),
            rng,
        }
    }

    pub fn from_animals(animals: Vec<Animal>, rng: R) -> Self {
        Self {
            population: Population::from_animals(animals),
            rng,
        }
    }

    /// Stock the zoo with its opening groups. Call once at startup.
    pub fn seed(&mut self) {
        self.population.seed(&mut self.rng);
        info!(
            population = self.population.len(),
            "Zoo seeded"
        );
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn day(&self) -> u32 {
        self.population.day()
    }

    /// Summary line; does not touch the simulation.
    pub fn stats(&self) -> String {
        self.population.stats().to_string()
    }

    pub fn snapshot(&self) -> ZooStats {
        self.population.stats()
    }

    /// Advance one day and return its log, one line per entry.
    pub fn tick(&mut self) -> Vec<String> {
        self.tick_events()
            .iter()
            .map(ToString::to_string)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Advance one day and return its log as typed events.
    #[instrument(skip(self), fields(day = self.population.day() + 1))]
    pub fn tick_events(&mut self) -> Vec<ZooEvent> {
        let day = self.population.advance_day();
        let mut events = vec![ZooEvent::DayStarted { day }];
        let dead_before = self.population.dead_count();

        self.run_activities(&mut events);
        let births = self.run_reproduction(&mut events);

        let deaths = self.population.announce_deaths();
        events.extend(deaths);

        let new_deaths = self.population.dead_count() - dead_before;
        if new_deaths > 0 && self.rng.gen_bool(0.5) {
            events.push(ZooEvent::SadDay);
        }

        let stats = self.population.stats();
        info!(
            event = "day_summary",
            day,
            living = stats.living,
            dead = stats.dead,
            births,
            new_deaths,
            "Day complete"
        );
        events.push(ZooEvent::Summary(stats));

        events
    }

    /// Every living animal, in shuffled order, does one activity and then
    /// goes through its daily decay.
    fn run_activities(&mut self, events: &mut Vec<ZooEvent>) {
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.shuffle(&mut self.rng);

        let animals = self.population.animals_mut();
        for idx in order {
            let animal = &mut animals[idx];
            if !animal.is_alive() {
                continue;
            }

            let activity = Activity::roll(&mut self.rng);
            if let Some(event) = animal.act(activity, &mut self.rng) {
                events.push(event);
            }
            animal.tick_body(&mut self.rng);
        }
    }

    /// Pair shuffled males and females of each species and let each pair
    /// try for a cub. Cubs join the population immediately.
    fn run_reproduction(&mut self, events: &mut Vec<ZooEvent>) -> usize {
        let mut groups: BTreeMap<Species, Vec<usize>> = BTreeMap::new();
        for (idx, animal) in self.population.animals().iter().enumerate() {
            if animal.is_alive() {
                groups.entry(animal.species).or_default().push(idx);
            }
        }

        let mut births = 0;
        for (species, group) in groups {
            if group.len() < 2 {
                continue;
            }

            let (mut males, mut females): (Vec<usize>, Vec<usize>) = group
                .into_iter()
                .partition(|&idx| self.population.animals()[idx].sex == Sex::Male);
            males.shuffle(&mut self.rng);
            females.shuffle(&mut self.rng);

            for (&male, &female) in males.iter().zip(females.iter()) {
                if !percent_roll(&mut self.rng, MATING_GATE) {
                    continue;
                }

                let animals = self.population.animals();
                let Some(cub) = animals[male].try_mate(&animals[female], &mut self.rng) else {
                    continue;
                };

                let cub = self.population.push_newborn(cub, &mut self.rng);
                debug!(
                    species = %species,
                    name = %cub.name,
                    sex = %cub.sex,
                    "Cub born"
                );
                events.push(ZooEvent::Born {
                    name: cub.name.clone(),
                    species: cub.species,
                });
                births += 1;
            }
        }

        births
    }
}

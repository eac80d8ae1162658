//! Animal state and per-animal behaviors.

use crate::events::ZooEvent;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zoo_core::{percent_roll, Sex, Species, SpeciesTraits, Vitals};

/// Hunger or thirst above this starts hurting
const STARVING_THRESHOLD: u32 = 80;
/// Age after which the elderly penalty may apply
const ELDERLY_AGE: u32 = 25;
const ELDERLY_PENALTY: u32 = 10;
/// Minimum age for either parent
pub const MATING_AGE: u32 = 2;

/// The three daily activities, picked by a percent roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Eat,
    Drink,
    Walk,
}

impl Activity {
    /// 35% eat, 30% drink, 35% walk
    pub fn roll(rng: &mut impl Rng) -> Self {
        match rng.gen_range(1..=100) {
            1..=35 => Activity::Eat,
            36..=65 => Activity::Drink,
            _ => Activity::Walk,
        }
    }
}

/// An animal in the zoo. Dead animals are kept for statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub species: Species,
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub vitals: Vitals,
    pub traits: SpeciesTraits,
    alive: bool,
}

impl Animal {
    pub fn new(species: Species, name: impl Into<String>, age: u32, sex: Sex, vitals: Vitals) -> Self {
        Self {
            species,
            name: name.into(),
            age,
            sex,
            vitals,
            traits: species.traits(),
            alive: true,
        }
    }

    /// An animal present when the zoo opens, named `<Species>-<index>`.
    pub fn seeded(species: Species, index: usize, sex: Sex, rng: &mut impl Rng) -> Self {
        let age = rng.gen_range(species.initial_age_range());
        let vitals = Vitals::random(rng);
        Self::new(species, format!("{}-{}", species, index), age, sex, vitals)
    }

    pub fn cub_name(species: Species, rng: &mut impl Rng) -> String {
        format!("{}-cub-{}", species, rng.gen_range(100..=999))
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn act(&mut self, activity: Activity, rng: &mut impl Rng) -> Option<ZooEvent> {
        match activity {
            Activity::Eat => self.eat(rng),
            Activity::Drink => self.drink(rng),
            Activity::Walk => self.walk(rng),
        }
    }

    pub fn eat(&mut self, rng: &mut impl Rng) -> Option<ZooEvent> {
        if !self.alive {
            return None;
        }
        self.vitals.lower_hunger(rng.gen_range(25..=40));
        self.vitals.heal(rng.gen_range(1..=3));
        Some(ZooEvent::Ate {
            name: self.name.clone(),
            species: self.species,
        })
    }

    pub fn drink(&mut self, rng: &mut impl Rng) -> Option<ZooEvent> {
        if !self.alive {
            return None;
        }
        self.vitals.lower_thirst(rng.gen_range(25..=40));
        self.vitals.heal(rng.gen_range(1..=3));
        Some(ZooEvent::Drank {
            name: self.name.clone(),
            species: self.species,
        })
    }

    pub fn walk(&mut self, rng: &mut impl Rng) -> Option<ZooEvent> {
        if !self.alive {
            return None;
        }
        self.vitals.raise_hunger(self.traits.walk_cost);
        self.vitals.raise_thirst(self.traits.walk_cost);
        self.vitals.heal(rng.gen_range(0..=2));
        Some(ZooEvent::Walked {
            name: self.name.clone(),
            species: self.species,
        })
    }

    /// Daily decay, applied after the animal's activity.
    ///
    /// The elderly penalty runs after the death check, so an old animal can
    /// end the day alive with zero health. It stays flagged alive until a
    /// later death check sees fatal vitals; the next day's activity may heal
    /// it first.
    pub fn tick_body(&mut self, rng: &mut impl Rng) {
        if !self.alive {
            return;
        }

        self.vitals.raise_hunger(self.traits.metabolism);
        self.vitals.raise_thirst(self.traits.metabolism);

        if percent_roll(rng, self.traits.sickness_chance) {
            let amount = rng.gen_range(5..=15);
            self.vitals.damage(amount);
            trace!(name = %self.name, amount, "Fell sick");
        }
        if self.vitals.hunger > STARVING_THRESHOLD {
            self.vitals.damage(rng.gen_range(5..=12));
        }
        if self.vitals.thirst > STARVING_THRESHOLD {
            self.vitals.damage(rng.gen_range(7..=16));
        }

        if self.vitals.is_fatal() {
            self.alive = false;
            debug!(
                name = %self.name,
                species = %self.species,
                age = self.age,
                hunger = self.vitals.hunger,
                thirst = self.vitals.thirst,
                health = self.vitals.health,
                "Animal died"
            );
        }

        self.age += rng.gen_range(0..=1);

        if self.age > ELDERLY_AGE && rng.gen_range(0..=10) == 0 {
            self.vitals.damage(ELDERLY_PENALTY);
        }
    }

    pub fn can_mate(&self, other: &Animal) -> bool {
        self.alive
            && other.alive
            && self.species == other.species
            && self.sex != other.sex
            && self.age >= MATING_AGE
            && other.age >= MATING_AGE
    }

    /// Roll against the higher of the two reproduction chances.
    pub fn try_mate(&self, other: &Animal, rng: &mut impl Rng) -> Option<Animal> {
        if !self.can_mate(other) {
            return None;
        }

        let chance = self
            .traits
            .reproduction_chance
            .max(other.traits.reproduction_chance);
        if !percent_roll(rng, chance) {
            return None;
        }

        let mut cub = Animal::new(
            self.species,
            Animal::cub_name(self.species, rng),
            0,
            Sex::random(rng),
            Vitals::random(rng),
        );
        cub.traits = self.traits;
        Some(cub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lion(sex: Sex, age: u32) -> Animal {
        Animal::new(Species::Lion, format!("Lion-{sex}-{age}"), age, sex, Vitals::new(10, 10, 100))
    }

    fn kill(animal: &mut Animal) {
        animal.vitals.health = 1;
        animal.vitals.hunger = 100;
        animal.tick_body(&mut ChaCha8Rng::seed_from_u64(0));
        assert!(!animal.is_alive());
    }

    #[test]
    fn test_activity_bands() {
        // StepRng(0, 0) always rolls the lowest value
        assert_eq!(Activity::roll(&mut StepRng::new(0, 0)), Activity::Eat);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            match Activity::roll(&mut rng) {
                Activity::Eat => seen[0] += 1,
                Activity::Drink => seen[1] += 1,
                Activity::Walk => seen[2] += 1,
            }
        }
        assert!(seen.iter().all(|&n| n > 700));
    }

    #[test]
    fn test_seeded_animal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let animal = Animal::seeded(Species::Penguin, 4, Sex::Female, &mut rng);
        assert_eq!(animal.name, "Penguin-4");
        assert!(Species::Penguin.initial_age_range().contains(&animal.age));
        assert_eq!(animal.traits, Species::Penguin.traits());
        assert!(animal.is_alive());
    }

    #[test]
    fn test_eat_and_drink() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut animal = Animal::new(Species::Zebra, "Zebra-1", 3, Sex::Male, Vitals::new(60, 20, 99));

        let event = animal.eat(&mut rng);
        assert!((20..=35).contains(&animal.vitals.hunger));
        assert_eq!(animal.vitals.health, 100);
        assert_eq!(event.unwrap().to_string(), "Zebra-1 (Zebra) ate");

        animal.drink(&mut rng);
        assert_eq!(animal.vitals.thirst, 0);
        assert_eq!(animal.vitals.health, 100);
    }

    #[test]
    fn test_walk_costs_hunger_and_thirst() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut animal = Animal::new(Species::Lion, "Lion-1", 3, Sex::Male, Vitals::new(20, 95, 50));
        let event = animal.walk(&mut rng);
        assert_eq!(animal.vitals.hunger, 30);
        assert_eq!(animal.vitals.thirst, 100);
        assert!((50..=52).contains(&animal.vitals.health));
        assert_eq!(event.unwrap().to_string(), "Lion-1 (Lion) went for a walk");
    }

    #[test]
    fn test_dead_animal_does_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut animal = lion(Sex::Male, 5);
        kill(&mut animal);
        let before = animal.clone();

        assert!(animal.eat(&mut rng).is_none());
        assert!(animal.drink(&mut rng).is_none());
        assert!(animal.walk(&mut rng).is_none());
        animal.tick_body(&mut rng);
        assert_eq!(animal, before);
    }

    #[test]
    fn test_tick_body_with_lowest_rolls() {
        let mut rng = StepRng::new(0, 0);
        let mut animal = Animal::new(Species::Lion, "Lion-1", 5, Sex::Male, Vitals::new(50, 50, 20));
        animal.tick_body(&mut rng);

        // metabolism 9, sick roll passes and takes the minimum 5
        assert_eq!(animal.vitals, Vitals::new(59, 59, 15));
        assert_eq!(animal.age, 5);
        assert!(animal.is_alive());
    }

    #[test]
    fn test_starvation_kills() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut animal = Animal::new(Species::Elephant, "Elephant-1", 5, Sex::Male, Vitals::new(95, 10, 100));
        animal.tick_body(&mut rng);
        assert_eq!(animal.vitals.hunger, 100);
        assert!(!animal.is_alive());
    }

    #[test]
    fn test_elderly_penalty_after_death_check() {
        // All-zero rolls: sick for 5, then the 1-in-11 elderly roll hits for 10.
        let mut rng = StepRng::new(0, 0);
        let mut animal = Animal::new(Species::Elephant, "Elephant-1", 30, Sex::Female, Vitals::new(10, 10, 15));
        animal.tick_body(&mut rng);
        assert_eq!(animal.vitals.health, 0);
        assert!(animal.is_alive());

        animal.tick_body(&mut rng);
        assert!(!animal.is_alive());
    }

    #[test]
    fn test_can_mate_rules() {
        let male = lion(Sex::Male, 5);
        let female = lion(Sex::Female, 5);
        assert!(male.can_mate(&female));

        assert!(!male.can_mate(&lion(Sex::Male, 5)));
        assert!(!male.can_mate(&lion(Sex::Female, 1)));

        let zebra = Animal::new(Species::Zebra, "Zebra-1", 5, Sex::Female, Vitals::new(10, 10, 100));
        assert!(!male.can_mate(&zebra));

        let mut dead = lion(Sex::Female, 5);
        kill(&mut dead);
        assert!(!male.can_mate(&dead));
        assert!(!dead.can_mate(&male));
    }

    #[test]
    fn test_try_mate_produces_cub() {
        // The lowest roll always passes the reproduction chance.
        let mut rng = StepRng::new(0, 0);
        let male = lion(Sex::Male, 5);
        let female = lion(Sex::Female, 5);

        let cub = male.try_mate(&female, &mut rng).unwrap();
        assert_eq!(cub.species, Species::Lion);
        assert_eq!(cub.age, 0);
        assert_eq!(cub.traits, male.traits);
        assert!(cub.name.starts_with("Lion-cub-"));
        assert!(cub.is_alive());
    }

    #[test]
    fn test_try_mate_refuses_ineligible() {
        let mut rng = StepRng::new(0, 0);
        let male = lion(Sex::Male, 5);
        assert!(male.try_mate(&lion(Sex::Male, 5), &mut rng).is_none());
        assert!(male.try_mate(&lion(Sex::Female, 1), &mut rng).is_none());
        let mut dead = lion(Sex::Female, 5);
        kill(&mut dead);
        assert!(male.try_mate(&dead, &mut rng).is_none());
    }

    fn arb_animal() -> impl Strategy<Value = Animal> {
        (
            prop::sample::select(Species::ALL.to_vec()),
            any::<bool>(),
            0u32..6,
            0u32..=100,
            0u32..=100,
            0u32..=100,
            any::<bool>(),
        )
            .prop_map(|(species, male, age, hunger, thirst, health, dead)| {
                let sex = if male { Sex::Male } else { Sex::Female };
                let mut animal = Animal::new(species, "arb", age, sex, Vitals::new(hunger, thirst, health));
                animal.alive = !dead;
                animal
            })
    }

    proptest! {
        #[test]
        fn prop_can_mate_symmetric(a in arb_animal(), b in arb_animal()) {
            prop_assert_eq!(a.can_mate(&b), b.can_mate(&a));
        }

        #[test]
        fn prop_no_cub_from_ineligible_pair(a in arb_animal(), b in arb_animal(), seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            if !a.can_mate(&b) {
                prop_assert!(a.try_mate(&b, &mut rng).is_none());
            }
        }

        #[test]
        fn prop_vitals_bounded(mut a in arb_animal(), seed in any::<u64>(), days in 1usize..40) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..days {
                let activity = Activity::roll(&mut rng);
                a.act(activity, &mut rng);
                prop_assert!(a.vitals.in_bounds());
                let was_alive = a.is_alive();
                a.tick_body(&mut rng);
                prop_assert!(a.vitals.in_bounds());
                prop_assert!(was_alive || !a.is_alive());
            }
        }
    }
}

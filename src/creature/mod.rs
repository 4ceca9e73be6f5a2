//! Creature state and daily physiology

pub mod factory;
pub mod observer;
pub mod species;

pub use factory::CreatureFactory;
pub use observer::HealthObserver;
pub use species::SpeciesTraits;

use rand::Rng;

use crate::core::error::{Result, ZooError};
use crate::core::types::{CreatureId, FoodKind, ObserverId, Sex};

/// Health below this value is considered critical and raises an alert
const CRITICAL_HEALTH: f32 = 30.0;

/// A portion of food offered to a creature
#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub kind: FoodKind,
    pub nutrition: f32,
}

impl Food {
    pub fn new(kind: FoodKind, nutrition: f32) -> Self {
        Self { kind, nutrition }
    }
}

/// Outcome of offering food
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedOutcome {
    /// Kind outside the diet: hunger and happiness both drop by 5
    Refused,
    Eaten { nutrition: f32 },
}

/// Result of one daily update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyOutcome {
    Uneventful,
    /// Gestation completed this tick; the engine constructs the newborn
    BirthDue,
}

/// Alert raised by a health mutation crossing a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthAlert {
    /// Health dropped below the critical threshold from at or above it
    Critical { health: f32 },
    /// Health reached exactly zero
    Died,
}

/// One animal's biological state
///
/// Health, hunger and happiness are private and always mutated through
/// clamping setters; every health mutation path feeds the alert buffer,
/// which the engine drains to the subscribed observer.
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    /// Display species tag; may be a fallback name the registry never saw
    pub species: String,
    pub traits: &'static SpeciesTraits,
    /// Fractional age in years (one tick advances it by 1/365)
    pub age: f32,
    health: f32,
    hunger: f32,
    happiness: f32,
    pub sex: Sex,
    pub pregnant: bool,
    pub days_pregnant: u32,
    pub social_needs: f32,
    subscribers: Vec<ObserverId>,
    pending_alerts: Vec<HealthAlert>,
}

impl Creature {
    pub fn new(
        id: CreatureId,
        species: impl Into<String>,
        name: Option<String>,
        age: f32,
        traits: &'static SpeciesTraits,
        sex: Sex,
    ) -> Self {
        let species = species.into();
        let name = name.unwrap_or_else(|| format!("{}-{}", species, id.0));
        Self {
            id,
            name,
            species,
            traits,
            age,
            health: 100.0,
            hunger: 0.0,
            happiness: 100.0,
            sex,
            pregnant: false,
            days_pregnant: 0,
            social_needs: 50.0,
            subscribers: Vec::new(),
            pending_alerts: Vec::new(),
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn happiness(&self) -> f32 {
        self.happiness
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// The variant's vocalization line
    pub fn call(&self) -> &'static str {
        self.traits.call
    }

    pub fn set_health(&mut self, value: f32) {
        let old = self.health;
        self.health = value.clamp(0.0, 100.0);
        if self.health < CRITICAL_HEALTH && old >= CRITICAL_HEALTH {
            self.pending_alerts.push(HealthAlert::Critical { health: self.health });
        }
        if self.health == 0.0 {
            self.pending_alerts.push(HealthAlert::Died);
        }
    }

    pub fn adjust_health(&mut self, delta: f32) {
        self.set_health(self.health + delta);
    }

    pub fn set_hunger(&mut self, value: f32) {
        self.hunger = value.clamp(0.0, 100.0);
    }

    pub fn adjust_hunger(&mut self, delta: f32) {
        self.set_hunger(self.hunger + delta);
    }

    pub fn set_happiness(&mut self, value: f32) {
        self.happiness = value.clamp(0.0, 100.0);
    }

    pub fn adjust_happiness(&mut self, delta: f32) {
        self.set_happiness(self.happiness + delta);
    }

    /// Drain alerts accumulated since the last drain
    pub fn take_alerts(&mut self) -> Vec<HealthAlert> {
        std::mem::take(&mut self.pending_alerts)
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    pub(crate) fn add_subscriber(&mut self, observer: ObserverId) {
        if !self.subscribers.contains(&observer) {
            self.subscribers.push(observer);
        }
    }

    pub(crate) fn remove_subscriber(&mut self, observer: ObserverId) {
        self.subscribers.retain(|&o| o != observer);
    }

    /// Advance one in-game day of physiology
    ///
    /// Order matters for deterministic replay: age, random hunger gain,
    /// happiness penalty, health decay or regen (mutually exclusive),
    /// social penalty, pregnancy progression.
    pub fn daily_update(&mut self, rng: &mut impl Rng) -> DailyOutcome {
        self.age += 1.0 / 365.0;
        let gain: f32 = rng.gen_range(5.0..15.0);
        self.adjust_hunger(gain);
        if self.hunger > 50.0 {
            self.adjust_happiness(-(self.hunger - 50.0) * 0.1);
        }
        if self.hunger > 80.0 {
            self.adjust_health(-(self.hunger - 80.0) * 0.5);
        } else if self.hunger < 30.0 && self.happiness > 60.0 {
            self.adjust_health(0.5);
        }
        if self.social_needs < 30.0 {
            self.adjust_happiness(-1.0);
        }
        if self.pregnant {
            self.days_pregnant += 1;
            if self.days_pregnant >= self.traits.gestation_days {
                self.pregnant = false;
                self.days_pregnant = 0;
                return DailyOutcome::BirthDue;
            }
        }
        DailyOutcome::Uneventful
    }

    /// Offer a portion of food
    ///
    /// Unaccepted kinds still reduce hunger a little but cost happiness,
    /// modeling wasted food. Accepted kinds feed all three stats.
    pub fn feed(&mut self, food: &Food) -> FeedOutcome {
        if !self.traits.accepts(food.kind) {
            self.adjust_hunger(-5.0);
            self.adjust_happiness(-5.0);
            return FeedOutcome::Refused;
        }
        self.adjust_hunger(-food.nutrition);
        self.adjust_happiness((food.nutrition * 0.3).min(10.0));
        self.adjust_health((food.nutrition * 0.1).min(5.0));
        FeedOutcome::Eaten { nutrition: food.nutrition }
    }

    /// Attempt to breed with a partner
    ///
    /// Species mismatch is an error; failed preconditions return Ok(false)
    /// without a draw. Past the gates exactly one draw decides success with
    /// probability (happiness_a + happiness_b) / 200, marking the female
    /// parent pregnant on success.
    pub fn attempt_breed_with(&mut self, partner: &mut Creature, rng: &mut impl Rng) -> Result<bool> {
        if self.species != partner.species {
            return Err(ZooError::SpeciesMismatch);
        }
        if self.sex == partner.sex {
            return Ok(false);
        }
        if self.health < 60.0 || partner.health < 60.0 {
            return Ok(false);
        }
        if self.happiness < 50.0 || partner.happiness < 50.0 {
            return Ok(false);
        }
        if self.pregnant || partner.pregnant {
            return Ok(false);
        }
        let chance = f64::from(self.happiness + partner.happiness) / 200.0;
        if rng.gen::<f64>() < chance {
            let female = if self.sex == Sex::Female { self } else { partner };
            female.pregnant = true;
            female.days_pregnant = 0;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

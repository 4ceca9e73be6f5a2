//! The zoo engine - owns all state and runs the day tick
//!
//! One call to [`Zoo::advance_day`] advances every habitat, creature and
//! account by one in-game day. All randomness flows through the engine's
//! seeded rng in a fixed draw order, so a seed reproduces a whole run.

pub mod events;
pub mod visitor;

pub use events::{Event, EventKind, EventLog};
pub use visitor::Visitor;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::config::ZooConfig;
use crate::core::error::{Result, ZooError};
use crate::core::types::{
    CreatureId, FoodKind, HabitatId, HabitatType, MedicineKind, ObserverId, Sex,
};
use crate::creature::{CreatureFactory, DailyOutcome, FeedOutcome, Food, HealthObserver};
use crate::economy::{Inventory, Ledger};
use crate::habitat::Habitat;

pub struct Zoo {
    pub name: String,
    config: ZooConfig,
    habitats: Vec<Habitat>,
    food: Inventory<FoodKind>,
    medicine: Inventory<MedicineKind>,
    ledger: Ledger,
    factory: CreatureFactory,
    observer: HealthObserver,
    log: EventLog,
    day: u32,
    next_habitat_id: u32,
    rng: ChaCha8Rng,
}

impl Zoo {
    pub fn new(name: impl Into<String>, config: ZooConfig, seed: u64) -> Self {
        let ledger = Ledger::new(config.starting_balance);
        Self {
            name: name.into(),
            config,
            habitats: Vec::new(),
            food: Inventory::new(),
            medicine: Inventory::new(),
            ledger,
            factory: CreatureFactory::new(),
            observer: HealthObserver::new(ObserverId(1)),
            log: EventLog::new(),
            day: 1,
            next_habitat_id: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The default park: three enclosures, four residents, starter stocks
    pub fn with_starter_layout(seed: u64) -> Self {
        let mut zoo = Zoo::new("Menagerie Park", ZooConfig::default(), seed);
        let forest = zoo.add_habitat("Forest Enclosure", 4, HabitatType::Forest);
        let grassland = zoo.add_habitat("Grassland Enclosure", 5, HabitatType::Grassland);
        let aviary = zoo.add_habitat("Aviary", 6, HabitatType::Aviary);

        zoo.seed_creature("koala", "Kiki", 2.0, forest);
        zoo.seed_creature("koala", "Koko", 3.0, forest);
        zoo.seed_creature("kangaroo", "Joey", 4.0, grassland);
        zoo.seed_creature("wedge-tailed eagle", "Aerie", 5.0, aviary);

        zoo.food.add(FoodKind::Eucalyptus, 20);
        zoo.food.add(FoodKind::HerbivoreFeed, 30);
        zoo.food.add(FoodKind::Seeds, 20);
        zoo.food.add(FoodKind::MeatyFeed, 10);
        zoo.food.add(FoodKind::GeneralFeed, 25);
        zoo.medicine.add(MedicineKind::BasicMed, 5);
        zoo
    }

    // === Accessors ===

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn habitats(&self) -> &[Habitat] {
        &self.habitats
    }

    pub fn habitat(&self, id: HabitatId) -> Result<&Habitat> {
        self.habitats
            .iter()
            .find(|h| h.id == id)
            .ok_or(ZooError::UnknownHabitat(id))
    }

    pub fn food(&self) -> &Inventory<FoodKind> {
        &self.food
    }

    pub fn medicine(&self) -> &Inventory<MedicineKind> {
        &self.medicine
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn observer(&self) -> &HealthObserver {
        &self.observer
    }

    /// Full read-only snapshot for hosts to render or export
    pub fn snapshot(&self) -> ZooSnapshot {
        let habitats = self
            .habitats
            .iter()
            .map(|h| HabitatSnapshot {
                id: h.id,
                name: h.name.clone(),
                habitat_type: h.habitat_type,
                capacity: h.capacity(),
                cleanliness: h.cleanliness,
                upgrade_level: h.upgrade_level(),
                residents: h
                    .residents()
                    .iter()
                    .map(|c| CreatureSnapshot {
                        id: c.id,
                        name: c.name.clone(),
                        species: c.species.clone(),
                        sex: c.sex,
                        age: c.age,
                        health: c.health(),
                        hunger: c.hunger(),
                        happiness: c.happiness(),
                        pregnant: c.pregnant,
                    })
                    .collect(),
            })
            .collect();

        let mut food: Vec<(String, u32)> =
            self.food.iter().map(|(k, q)| (k.label().to_string(), q)).collect();
        food.sort();
        let mut medicine: Vec<(String, u32)> =
            self.medicine.iter().map(|(k, q)| (k.label().to_string(), q)).collect();
        medicine.sort();

        ZooSnapshot {
            name: self.name.clone(),
            day: self.day,
            balance: self.ledger.balance(),
            habitats,
            food,
            medicine,
            recent_events: self.log.tail(30).iter().map(|e| e.to_string()).collect(),
        }
    }

    // === Setup ===

    pub fn add_habitat(&mut self, name: impl Into<String>, capacity: usize, habitat_type: HabitatType) -> HabitatId {
        let id = HabitatId(self.next_habitat_id);
        self.next_habitat_id += 1;
        self.habitats.push(Habitat::new(id, name, capacity, habitat_type));
        id
    }

    /// Place a starter creature without touching the ledger
    fn seed_creature(&mut self, species: &str, name: &str, age: f32, habitat: HabitatId) {
        let Ok(h) = self.habitat_index(habitat) else { return };
        let creature = self.factory.create(species, Some(name.to_string()), age, &mut self.rng);
        let id = creature.id;
        if self.habitats[h].add_resident(creature).is_ok() {
            if let Some(c) = self.habitats[h].get_mut(id) {
                self.observer.subscribe(c);
            }
        }
    }

    // === The day tick ===

    /// Run one full day: visitor wave, per-habitat pass, random event,
    /// then the day counter advances. Internal shortfalls are absorbed;
    /// nothing here fails.
    pub fn advance_day(&mut self) {
        self.visitor_wave();
        self.habitat_pass();
        self.random_event();
        tracing::debug!(day = self.day, balance = self.ledger.balance(), "day complete");
        self.day += 1;
    }

    /// Phase 1: visitors wander in, each picking one enclosure
    fn visitor_wave(&mut self) {
        let (lo, hi) = self.config.visitors_per_day;
        let visitor_count = self.rng.gen_range(lo..=hi);
        let mut revenue = 0.0;
        if !self.habitats.is_empty() {
            for _ in 0..visitor_count {
                let (blo, bhi) = self.config.visitor_budget;
                let budget = self.rng.gen_range(blo..bhi);
                let index = self.rng.gen_range(0..self.habitats.len());
                let mut visitor = Visitor::new(budget);
                revenue += visitor.visit(&self.habitats[index], &mut self.rng);
            }
        }
        revenue += f64::from(visitor_count) * self.config.ticket_price;
        self.ledger.add_income(revenue, "daily visitors & sales");
        self.log.record(self.day, EventKind::VisitorWave { visitors: visitor_count, revenue });
    }

    /// Phase 2: per habitat, maintenance then each resident's care cycle
    fn habitat_pass(&mut self) {
        for h in 0..self.habitats.len() {
            self.habitats[h].daily_maintenance();
            // Snapshot of ids: births and deaths mutate the list mid-pass
            let ids = self.habitats[h].resident_ids();
            for id in ids {
                self.auto_feed(h, id);
                let outcome = {
                    match self.habitats[h].get_mut(id) {
                        Some(creature) => creature.daily_update(&mut self.rng),
                        None => continue,
                    }
                };
                if outcome == DailyOutcome::BirthDue {
                    self.handle_birth(h, id);
                }
                self.drain_alerts(h, id);
                let dead = self.habitats[h].get(id).is_some_and(|c| !c.is_alive());
                if dead {
                    if let Some(mut creature) = self.habitats[h].remove_resident(id) {
                        self.observer.unsubscribe(&mut creature);
                        tracing::info!(name = %creature.name, species = %creature.species, "creature died");
                        self.log.record(
                            self.day,
                            EventKind::Death { name: creature.name, species: creature.species },
                        );
                    }
                }
            }
        }
    }

    /// Try each accepted food kind in preference order; with nothing in
    /// stock the resident goes hungrier, on top of the hunger its own
    /// update adds this same tick (intentional double penalty)
    fn auto_feed(&mut self, h: usize, id: CreatureId) {
        let accepted = match self.habitats[h].get(id) {
            Some(creature) => creature.traits.accepted_foods,
            None => return,
        };
        for &kind in accepted {
            if self.food.has(kind) {
                self.food.remove(kind, 1);
                let ration = Food::new(kind, self.config.auto_feed_nutrition);
                if let Some(creature) = self.habitats[h].get_mut(id) {
                    creature.feed(&ration);
                }
                return;
            }
        }
        if let Some(creature) = self.habitats[h].get_mut(id) {
            creature.adjust_hunger(5.0);
        }
    }

    /// Construct the newborn and try to place it beside its mother
    fn handle_birth(&mut self, h: usize, mother: CreatureId) {
        let species = match self.habitats[h].get(mother) {
            Some(creature) => creature.species.clone(),
            None => return,
        };
        let baby = self.factory.newborn(&species, &mut self.rng);
        let baby_id = baby.id;
        let baby_name = baby.name.clone();
        let habitat_name = self.habitats[h].name.clone();
        match self.habitats[h].add_resident(baby) {
            Ok(()) => {
                if let Some(creature) = self.habitats[h].get_mut(baby_id) {
                    self.observer.subscribe(creature);
                }
                self.log.record(
                    self.day,
                    EventKind::Birth { name: baby_name, species, habitat: habitat_name },
                );
            }
            Err(_) => {
                self.log.record(
                    self.day,
                    EventKind::NewbornLost { species, habitat: habitat_name },
                );
            }
        }
    }

    /// Phase 3: one uniform draw lands in mutually exclusive bands
    fn random_event(&mut self) {
        let r: f64 = self.rng.gen();
        if r < self.config.heatwave_band {
            for habitat in &mut self.habitats {
                habitat.cleanliness -= 15.0;
                for creature in habitat.residents_mut() {
                    creature.adjust_happiness(-10.0);
                }
            }
            // The event happens whether or not the zoo can pay for it
            let _ = self.ledger.add_expense(self.config.heatwave_cost, "heatwave emergency cooling");
            self.log.record(self.day, EventKind::Heatwave);
        } else if r < self.config.donation_band {
            if self.ledger.balance() > self.config.donation_min_balance {
                let (lo, hi) = self.config.donation_amount;
                let amount = self.rng.gen_range(lo..hi);
                self.ledger.add_income(amount, "donation");
                self.log.record(self.day, EventKind::Donation { amount });
            }
        } else if r < self.config.escape_band {
            let occupied: Vec<usize> = self
                .habitats
                .iter()
                .enumerate()
                .filter(|(_, h)| !h.is_empty())
                .map(|(i, _)| i)
                .collect();
            if !occupied.is_empty() {
                let h = occupied[self.rng.gen_range(0..occupied.len())];
                let habitat = &mut self.habitats[h];
                let index = self.rng.gen_range(0..habitat.resident_count());
                let creature = &mut habitat.residents_mut()[index];
                creature.adjust_happiness(-20.0);
                let name = creature.name.clone();
                let _ = self.ledger.add_expense(self.config.escape_repair_cost, "escape incident repairs");
                self.log.record(self.day, EventKind::EscapeScare { name });
            }
        }
    }

    /// Forward buffered health alerts to the observer and the log
    fn drain_alerts(&mut self, h: usize, id: CreatureId) {
        let (name, alerts, subscribed) = match self.habitats[h].get_mut(id) {
            Some(creature) => (creature.name.clone(), creature.take_alerts(), creature.has_subscribers()),
            None => return,
        };
        if !subscribed {
            return;
        }
        for alert in alerts {
            let message = self.observer.render(&alert);
            tracing::warn!(creature = %name, %message, "health alert");
            self.log.record(self.day, EventKind::HealthAlert { name: name.clone(), message });
        }
    }

    // === Host-facing operations ===

    pub fn buy_food(&mut self, kind: FoodKind, quantity: u32, unit_price: f64) -> Result<()> {
        let cost = unit_price * f64::from(quantity);
        self.ledger.add_expense(cost, format!("bought {quantity}x {kind}"))?;
        self.food.add(kind, quantity);
        self.log.record(self.day, EventKind::FoodPurchased { kind, quantity, cost });
        Ok(())
    }

    /// Construct via the factory, place, debit, subscribe, log
    pub fn buy_creature(&mut self, species: &str, habitat: HabitatId, price: f64) -> Result<CreatureId> {
        let h = self.habitat_index(habitat)?;
        if price > self.ledger.balance() {
            return Err(ZooError::InsufficientFunds {
                needed: price,
                available: self.ledger.balance(),
            });
        }
        let (traits, display) = self.factory.resolve(species);
        self.habitats[h].can_accept(&display, traits.category)?;

        let creature = self.factory.create(species, None, 0.0, &mut self.rng);
        let id = creature.id;
        let name = creature.name.clone();
        let species_name = creature.species.clone();
        self.habitats[h].add_resident(creature)?;
        self.ledger.add_expense(price, format!("bought creature {name} ({species_name})"))?;
        if let Some(c) = self.habitats[h].get_mut(id) {
            self.observer.subscribe(c);
        }
        self.log.record(
            self.day,
            EventKind::CreaturePurchased { name, species: species_name, price },
        );
        Ok(id)
    }

    pub fn clean_habitat(&mut self, id: HabitatId) -> Result<()> {
        let h = self.habitat_index(id)?;
        let cost = self.config.clean_base_cost * (1.0 + self.habitats[h].resident_count() as f64 / 2.0);
        self.ledger.add_expense(cost, "cleaning enclosure")?;
        self.habitats[h].clean();
        let name = self.habitats[h].name.clone();
        self.log.record(self.day, EventKind::HabitatCleaned { name, cost });
        Ok(())
    }

    pub fn upgrade_habitat(&mut self, id: HabitatId) -> Result<()> {
        let h = self.habitat_index(id)?;
        let cost = self.config.upgrade_base_cost * f64::from(self.habitats[h].upgrade_level());
        self.ledger.add_expense(cost, "enclosure upgrade")?;
        self.habitats[h].upgrade();
        let name = self.habitats[h].name.clone();
        let level = self.habitats[h].upgrade_level();
        self.log.record(self.day, EventKind::HabitatUpgraded { name, level, cost });
        Ok(())
    }

    /// Hand-feed one creature a single unit from the food inventory
    pub fn feed_creature(&mut self, id: CreatureId, kind: FoodKind) -> Result<FeedOutcome> {
        let h = self.locate(id)?;
        if !self.food.has(kind) {
            return Err(ZooError::OutOfStock(kind));
        }
        self.food.remove(kind, 1);
        let portion = Food::new(kind, self.config.hand_feed_nutrition);
        let outcome = self.habitats[h]
            .get_mut(id)
            .map(|c| c.feed(&portion))
            .ok_or(ZooError::UnknownCreature(id))?;
        self.drain_alerts(h, id);
        Ok(outcome)
    }

    /// One dose of whatever medicine is in stock: flat health boost
    pub fn give_medicine(&mut self, id: CreatureId) -> Result<()> {
        let h = self.locate(id)?;
        let kind = MedicineKind::ALL
            .iter()
            .copied()
            .find(|&k| self.medicine.has(k))
            .ok_or(ZooError::NoMedicine)?;
        self.medicine.remove(kind, 1);
        let heal = self.config.medicine_heal;
        self.habitats[h]
            .get_mut(id)
            .ok_or(ZooError::UnknownCreature(id))?
            .adjust_health(heal);
        self.drain_alerts(h, id);
        Ok(())
    }

    pub fn buy_medicine(&mut self, quantity: u32, unit_price: f64) -> Result<()> {
        let cost = unit_price * f64::from(quantity);
        self.ledger.add_expense(cost, format!("bought {quantity}x medicine"))?;
        self.medicine.add(MedicineKind::BasicMed, quantity);
        Ok(())
    }

    /// Attempt to breed two creatures, wherever they live
    pub fn attempt_breed(&mut self, a: CreatureId, b: CreatureId) -> Result<bool> {
        if a == b {
            return Err(ZooError::UnknownCreature(b));
        }
        let ha = self.locate(a)?;
        let hb = self.locate(b)?;
        if ha == hb {
            let habitat = &mut self.habitats[ha];
            let (ca, cb) = habitat.pair_mut(a, b).ok_or(ZooError::UnknownCreature(a))?;
            ca.attempt_breed_with(cb, &mut self.rng)
        } else {
            let (lo, hi) = (ha.min(hb), ha.max(hb));
            let (left, right) = self.habitats.split_at_mut(hi);
            let (id_lo, id_hi) = if ha < hb { (a, b) } else { (b, a) };
            let c_lo = left[lo].get_mut(id_lo).ok_or(ZooError::UnknownCreature(id_lo))?;
            let c_hi = right[0].get_mut(id_hi).ok_or(ZooError::UnknownCreature(id_hi))?;
            let (first, second) = if ha < hb { (c_lo, c_hi) } else { (c_hi, c_lo) };
            first.attempt_breed_with(second, &mut self.rng)
        }
    }

    // === Lookup helpers ===

    fn habitat_index(&self, id: HabitatId) -> Result<usize> {
        self.habitats
            .iter()
            .position(|h| h.id == id)
            .ok_or(ZooError::UnknownHabitat(id))
    }

    fn locate(&self, id: CreatureId) -> Result<usize> {
        self.habitats
            .iter()
            .position(|h| h.get(id).is_some())
            .ok_or(ZooError::UnknownCreature(id))
    }
}

// === Snapshots ===

#[derive(Debug, Clone, Serialize)]
pub struct ZooSnapshot {
    pub name: String,
    pub day: u32,
    pub balance: f64,
    pub habitats: Vec<HabitatSnapshot>,
    pub food: Vec<(String, u32)>,
    pub medicine: Vec<(String, u32)>,
    pub recent_events: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitatSnapshot {
    pub id: HabitatId,
    pub name: String,
    pub habitat_type: HabitatType,
    pub capacity: usize,
    pub cleanliness: f32,
    pub upgrade_level: u32,
    pub residents: Vec<CreatureSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatureSnapshot {
    pub id: CreatureId,
    pub name: String,
    pub species: String,
    pub sex: Sex,
    pub age: f32,
    pub health: f32,
    pub hunger: f32,
    pub happiness: f32,
    pub pregnant: bool,
}

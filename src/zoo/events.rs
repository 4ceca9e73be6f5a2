//! Event log - the narrative record of everything that happens in the zoo

use serde::Serialize;
use std::fmt;

use crate::core::types::FoodKind;

/// A logged occurrence
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub day: u32,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize)]
pub enum EventKind {
    VisitorWave { visitors: u32, revenue: f64 },
    FoodPurchased { kind: FoodKind, quantity: u32, cost: f64 },
    CreaturePurchased { name: String, species: String, price: f64 },
    Birth { name: String, species: String, habitat: String },
    /// A newborn that could not be placed; a narrative outcome, not an error
    NewbornLost { species: String, habitat: String },
    Death { name: String, species: String },
    HealthAlert { name: String, message: String },
    Heatwave,
    Donation { amount: f64 },
    EscapeScare { name: String },
    HabitatCleaned { name: String, cost: f64 },
    HabitatUpgraded { name: String, level: u32, cost: f64 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: ", self.day)?;
        match &self.kind {
            EventKind::VisitorWave { visitors, revenue } => {
                write!(f, "{visitors} visitors brought in ${revenue:.2}")
            }
            EventKind::FoodPurchased { kind, quantity, cost } => {
                write!(f, "purchased {quantity}x {kind} for ${cost:.2}")
            }
            EventKind::CreaturePurchased { name, species, price } => {
                write!(f, "bought {name} the {species} for ${price:.2}")
            }
            EventKind::Birth { name, species, habitat } => {
                write!(f, "new birth! a {species} named {name} was born in {habitat}")
            }
            EventKind::NewbornLost { species, habitat } => {
                write!(f, "a newborn {species} couldn't be placed in {habitat} and sadly didn't survive")
            }
            EventKind::Death { name, species } => {
                write!(f, "{name} ({species}) died of poor health")
            }
            EventKind::HealthAlert { name, message } => {
                write!(f, "[alert] {name}: {message}")
            }
            EventKind::Heatwave => {
                write!(f, "heatwave: the whole zoo is stressed; emergency cooling deployed")
            }
            EventKind::Donation { amount } => {
                write!(f, "a generous donor gave ${amount:.2}")
            }
            EventKind::EscapeScare { name } => {
                write!(f, "{name} had an escape scare and is stressed")
            }
            EventKind::HabitatCleaned { name, cost } => {
                write!(f, "cleaned {name} for ${cost:.2}")
            }
            EventKind::HabitatUpgraded { name, level, cost } => {
                write!(f, "upgraded {name} to level {level} for ${cost:.2}")
            }
        }
    }
}

/// Ordered, unbounded log; hosts truncate for display only
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, day: u32, kind: EventKind) {
        let event = Event { day, kind };
        tracing::debug!(%event, "zoo event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn tail(&self, n: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }

    pub fn events_for_day(&self, day: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.day == day)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

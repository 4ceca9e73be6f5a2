//! Visitors - transient actors whose enclosure visits yield spending

use rand::Rng;

use crate::habitat::Habitat;

/// A visitor exists for a single enclosure visit within one tick
#[derive(Debug, Clone)]
pub struct Visitor {
    pub budget: f64,
    pub satisfaction: f64,
}

impl Visitor {
    pub fn new(budget: f64) -> Self {
        Self { budget, satisfaction: 70.0 }
    }

    /// Visit one enclosure and return what the visitor spends
    ///
    /// Satisfaction shifts with resident happiness and cleanliness, then
    /// scales a random spending impulse, capped by the remaining budget.
    pub fn visit(&mut self, habitat: &Habitat, rng: &mut impl Rng) -> f64 {
        let avg_happiness = f64::from(habitat.average_happiness());
        let cleanliness = f64::from(habitat.cleanliness);
        self.satisfaction += (avg_happiness - 50.0) / 20.0 + (cleanliness - 50.0) / 50.0;

        let impulse: f64 = rng.gen_range(5.0..25.0);
        let spend = (impulse * (self.satisfaction / 100.0)).clamp(0.0, self.budget);
        self.budget -= spend;
        spend
    }
}

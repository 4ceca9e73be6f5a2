//! Health observer registry
//!
//! One engine-owned observer subscribes to many creatures. Both sides of
//! the relation hold plain ids: the observer keeps a forward list of
//! subscribed creatures, each creature a back list of observer ids, and
//! subscribe/unsubscribe update both sides together.

use crate::core::types::{CreatureId, ObserverId};
use crate::creature::{Creature, HealthAlert};

#[derive(Debug)]
pub struct HealthObserver {
    pub id: ObserverId,
    subscribed: Vec<CreatureId>,
}

impl HealthObserver {
    pub fn new(id: ObserverId) -> Self {
        Self { id, subscribed: Vec::new() }
    }

    pub fn subscribe(&mut self, creature: &mut Creature) {
        if !self.subscribed.contains(&creature.id) {
            self.subscribed.push(creature.id);
            creature.add_subscriber(self.id);
        }
    }

    /// Remove both sides of the subscription
    pub fn unsubscribe(&mut self, creature: &mut Creature) {
        self.subscribed.retain(|&c| c != creature.id);
        creature.remove_subscriber(self.id);
    }

    pub fn is_subscribed(&self, creature: CreatureId) -> bool {
        self.subscribed.contains(&creature)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscribed.len()
    }

    /// Render an alert into the message the log carries
    pub fn render(&self, alert: &HealthAlert) -> String {
        match alert {
            HealthAlert::Critical { health } => format!("health critical ({health:.1})"),
            HealthAlert::Died => "this animal has died".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CreatureId, Sex};
    use crate::creature::species;

    fn koala(id: u32) -> Creature {
        Creature::new(CreatureId(id), "Koala", None, 2.0, &species::KOALA, Sex::Female)
    }

    #[test]
    fn test_subscribe_links_both_sides() {
        let mut observer = HealthObserver::new(ObserverId(1));
        let mut c = koala(1);
        observer.subscribe(&mut c);
        assert!(observer.is_subscribed(c.id));
        assert!(c.has_subscribers());

        // Idempotent
        observer.subscribe(&mut c);
        assert_eq!(observer.subscription_count(), 1);
    }

    #[test]
    fn test_unsubscribe_removes_both_sides() {
        let mut observer = HealthObserver::new(ObserverId(1));
        let mut c = koala(1);
        observer.subscribe(&mut c);
        observer.unsubscribe(&mut c);
        assert!(!observer.is_subscribed(c.id));
        assert!(!c.has_subscribers());
    }

    #[test]
    fn test_critical_crossing_raises_alert() {
        let mut c = koala(1);
        c.set_health(35.0);
        assert!(c.take_alerts().is_empty());
        c.adjust_health(-10.0);
        assert_eq!(c.take_alerts(), vec![HealthAlert::Critical { health: 25.0 }]);
        // Already below threshold: no second crossing
        c.adjust_health(-5.0);
        assert!(c.take_alerts().is_empty());
    }

    #[test]
    fn test_reaching_zero_raises_death_alert() {
        let mut c = koala(1);
        c.set_health(40.0);
        c.adjust_health(-40.0);
        let alerts = c.take_alerts();
        assert!(alerts.contains(&HealthAlert::Critical { health: 0.0 }));
        assert!(alerts.contains(&HealthAlert::Died));
        assert!(!c.is_alive());
    }
}

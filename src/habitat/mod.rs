//! Habitats - bounded, typed containers of creatures

use crate::core::error::{Result, ZooError};
use crate::core::types::{CreatureId, HabitatId, HabitatType, SpeciesCategory};
use crate::creature::Creature;

/// A capacity- and type-constrained enclosure
///
/// Residents keep insertion order (display only, no semantics).
/// Cleanliness is deliberately not clamped below zero; the < 30 threshold
/// behaves the same either way and the raw value is a useful signal of
/// how neglected an enclosure is.
#[derive(Debug)]
pub struct Habitat {
    pub id: HabitatId,
    pub name: String,
    pub habitat_type: HabitatType,
    capacity: usize,
    pub cleanliness: f32,
    residents: Vec<Creature>,
    upgrade_level: u32,
}

impl Habitat {
    pub fn new(id: HabitatId, name: impl Into<String>, capacity: usize, habitat_type: HabitatType) -> Self {
        Self {
            id,
            name: name.into(),
            habitat_type,
            capacity,
            cleanliness: 100.0,
            residents: Vec::new(),
            upgrade_level: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn upgrade_level(&self) -> u32 {
        self.upgrade_level
    }

    pub fn residents(&self) -> &[Creature] {
        &self.residents
    }

    pub fn residents_mut(&mut self) -> &mut [Creature] {
        &mut self.residents
    }

    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Ids of current residents, in insertion order; used by the engine
    /// as an iteration snapshot so the list can be mutated mid-pass
    pub fn resident_ids(&self) -> Vec<CreatureId> {
        self.residents.iter().map(|c| c.id).collect()
    }

    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.residents.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.residents.iter_mut().find(|c| c.id == id)
    }

    /// Two distinct residents borrowed mutably at once (breeding)
    pub fn pair_mut(&mut self, a: CreatureId, b: CreatureId) -> Option<(&mut Creature, &mut Creature)> {
        let ia = self.residents.iter().position(|c| c.id == a)?;
        let ib = self.residents.iter().position(|c| c.id == b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (left, right) = self.residents.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.residents.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    /// Check whether a creature of the given category would be admitted
    pub fn can_accept(&self, species: &str, category: SpeciesCategory) -> Result<()> {
        if self.residents.len() >= self.capacity {
            return Err(ZooError::CapacityExceeded(self.capacity));
        }
        if self.habitat_type == HabitatType::Aviary && category.is_mammal() {
            return Err(ZooError::SpeciesIncompatible {
                species: species.to_string(),
                habitat: self.habitat_type,
            });
        }
        Ok(())
    }

    /// Admit a creature; a rejected creature is dropped, so callers that
    /// must not lose it check `can_accept` first
    pub fn add_resident(&mut self, creature: Creature) -> Result<()> {
        self.can_accept(&creature.species, creature.traits.category)?;
        self.residents.push(creature);
        Ok(())
    }

    /// Remove a resident if present; absence is not an error
    pub fn remove_resident(&mut self, id: CreatureId) -> Option<Creature> {
        let index = self.residents.iter().position(|c| c.id == id)?;
        Some(self.residents.remove(index))
    }

    /// Daily wear: cleanliness drops with crowding, and a dirty enclosure
    /// erodes resident happiness and health on top of their own updates
    pub fn daily_maintenance(&mut self) {
        self.cleanliness -= self.residents.len() as f32 * 0.5;
        if self.cleanliness < 30.0 {
            for creature in &mut self.residents {
                creature.adjust_happiness(-1.0);
                creature.adjust_health(-0.3);
            }
        }
    }

    /// Reset cleanliness; the cost is charged at the engine boundary
    pub fn clean(&mut self) {
        self.cleanliness = 100.0;
    }

    /// Raise the upgrade level: +2 capacity, +5 happiness for residents
    pub fn upgrade(&mut self) {
        self.upgrade_level += 1;
        self.capacity += 2;
        for creature in &mut self.residents {
            creature.adjust_happiness(5.0);
        }
    }

    /// Mean resident happiness; a neutral 50 when the habitat is empty
    pub fn average_happiness(&self) -> f32 {
        if self.residents.is_empty() {
            return 50.0;
        }
        let sum: f32 = self.residents.iter().map(|c| c.happiness()).sum();
        sum / self.residents.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sex;
    use crate::creature::species;

    fn creature(id: u32, traits: &'static crate::creature::SpeciesTraits) -> Creature {
        Creature::new(CreatureId(id), traits.name, None, 2.0, traits, Sex::Female)
    }

    #[test]
    fn test_capacity_is_enforced_at_insertion() {
        let mut habitat = Habitat::new(HabitatId(1), "Paddock", 1, HabitatType::Grassland);
        habitat.add_resident(creature(1, &species::KANGAROO)).unwrap();
        let err = habitat.add_resident(creature(2, &species::KANGAROO));
        assert!(matches!(err, Err(ZooError::CapacityExceeded(1))));
        assert_eq!(habitat.resident_count(), 1);
    }

    #[test]
    fn test_aviary_rejects_mammals_but_admits_birds() {
        let mut aviary = Habitat::new(HabitatId(1), "Aviary", 6, HabitatType::Aviary);
        let err = aviary.add_resident(creature(1, &species::KOALA));
        assert!(matches!(err, Err(ZooError::SpeciesIncompatible { .. })));
        aviary.add_resident(creature(2, &species::WEDGE_TAILED_EAGLE)).unwrap();
        assert_eq!(aviary.resident_count(), 1);
    }

    #[test]
    fn test_removing_absent_resident_is_a_noop() {
        let mut habitat = Habitat::new(HabitatId(1), "Forest", 4, HabitatType::Forest);
        assert!(habitat.remove_resident(CreatureId(99)).is_none());
    }

    #[test]
    fn test_dirty_habitat_erodes_residents() {
        let mut habitat = Habitat::new(HabitatId(1), "Forest", 4, HabitatType::Forest);
        habitat.add_resident(creature(1, &species::KOALA)).unwrap();
        habitat.cleanliness = 29.0;
        let before_happiness = habitat.residents()[0].happiness();
        let before_health = habitat.residents()[0].health();
        habitat.daily_maintenance();
        assert!((habitat.cleanliness - 28.5).abs() < 1e-4);
        assert!((habitat.residents()[0].happiness() - (before_happiness - 1.0)).abs() < 1e-4);
        assert!((habitat.residents()[0].health() - (before_health - 0.3)).abs() < 1e-4);
    }

    #[test]
    fn test_cleanliness_can_go_negative() {
        let mut habitat = Habitat::new(HabitatId(1), "Forest", 8, HabitatType::Forest);
        for i in 0..8 {
            habitat.add_resident(creature(i, &species::KOALA)).unwrap();
        }
        habitat.cleanliness = 1.0;
        habitat.daily_maintenance();
        assert!(habitat.cleanliness < 0.0);
    }

    #[test]
    fn test_upgrade_keeps_members_and_raises_happiness() {
        let mut habitat = Habitat::new(HabitatId(1), "Forest", 4, HabitatType::Forest);
        for i in 1..=3 {
            let mut c = creature(i, &species::KOALA);
            c.set_happiness(90.0 + i as f32 * 3.0); // 93, 96, 99 - some clamp at 100
            habitat.add_resident(c).unwrap();
        }
        let before: Vec<(CreatureId, f32)> =
            habitat.residents().iter().map(|c| (c.id, c.happiness())).collect();

        habitat.upgrade();

        assert_eq!(habitat.upgrade_level(), 2);
        assert_eq!(habitat.capacity(), 6);
        let after: Vec<(CreatureId, f32)> =
            habitat.residents().iter().map(|c| (c.id, c.happiness())).collect();
        assert_eq!(before.len(), after.len());
        for ((id_before, h_before), (id_after, h_after)) in before.iter().zip(after.iter()) {
            assert_eq!(id_before, id_after);
            assert!((h_after - (h_before + 5.0).min(100.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_average_happiness_defaults_to_neutral_when_empty() {
        let habitat = Habitat::new(HabitatId(1), "Forest", 4, HabitatType::Forest);
        assert_eq!(habitat.average_happiness(), 50.0);
    }
}

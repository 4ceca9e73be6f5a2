//! Species registry and canonical creature construction
//!
//! Breeding, birth and purchase all construct through the factory so id
//! assignment, default stats and sex randomization happen in one place.

use ahash::AHashMap;
use rand::Rng;

use crate::core::types::{CreatureId, Sex};
use crate::creature::species::{self, SpeciesTraits};
use crate::creature::Creature;

/// Keyword -> trait-record registry with a generic-mammal fallback
#[derive(Debug)]
pub struct CreatureFactory {
    registry: AHashMap<&'static str, &'static SpeciesTraits>,
    next_id: u32,
}

impl CreatureFactory {
    pub fn new() -> Self {
        let mut registry: AHashMap<&'static str, &'static SpeciesTraits> = AHashMap::new();
        registry.insert("koala", &species::KOALA);
        registry.insert("kangaroo", &species::KANGAROO);
        registry.insert("wedge-tailed eagle", &species::WEDGE_TAILED_EAGLE);
        registry.insert("eagle", &species::WEDGE_TAILED_EAGLE);
        Self { registry, next_id: 1 }
    }

    /// Register an additional keyword for a trait record
    pub fn register(&mut self, keyword: &'static str, traits: &'static SpeciesTraits) {
        self.registry.insert(keyword, traits);
    }

    /// Resolve a species keyword (case-insensitive) to its trait record
    /// and display name; unknown keywords fall back to a generic mammal
    /// named from the input.
    pub fn resolve(&self, species: &str) -> (&'static SpeciesTraits, String) {
        let keyword = species.trim().to_lowercase();
        match self.registry.get(keyword.as_str()) {
            Some(&traits) => (traits, traits.name.to_string()),
            None => (&species::GENERIC_MAMMAL, title_case(species.trim())),
        }
    }

    /// Construct a creature with full default stats
    pub fn create(
        &mut self,
        species: &str,
        name: Option<String>,
        age: f32,
        rng: &mut impl Rng,
    ) -> Creature {
        let (traits, display) = self.resolve(species);
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
        Creature::new(id, display, name, age, traits, sex)
    }

    /// Construct a newborn: age zero, health and happiness both 80
    pub fn newborn(&mut self, species: &str, rng: &mut impl Rng) -> Creature {
        let mut baby = self.create(species, None, 0.0, rng);
        baby.set_health(80.0);
        baby.set_happiness(80.0);
        baby
    }
}

impl Default for CreatureFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

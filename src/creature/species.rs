//! Flat per-species trait records
//!
//! Each species is a static record of diet, call, gestation and lifespan;
//! creatures carry a reference to their record and dispatch on it instead
//! of on a type hierarchy.

use serde::Serialize;

use crate::core::types::{FoodKind, SpeciesCategory};

/// Static trait record a creature is configured with at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesTraits {
    /// Canonical display name
    pub name: &'static str,
    pub category: SpeciesCategory,
    /// Accepted food kinds, in auto-feed preference order
    pub accepted_foods: &'static [FoodKind],
    /// Vocalization line
    pub call: &'static str,
    pub gestation_days: u32,
    pub max_age_years: f32,
}

impl SpeciesTraits {
    pub fn accepts(&self, kind: FoodKind) -> bool {
        self.accepted_foods.contains(&kind)
    }
}

pub const KOALA: SpeciesTraits = SpeciesTraits {
    name: "Koala",
    category: SpeciesCategory::Marsupial,
    accepted_foods: &[FoodKind::Eucalyptus],
    call: "munch munch",
    gestation_days: 34,
    max_age_years: 18.0,
};

pub const KANGAROO: SpeciesTraits = SpeciesTraits {
    name: "Kangaroo",
    category: SpeciesCategory::Marsupial,
    accepted_foods: &[FoodKind::HerbivoreFeed, FoodKind::GeneralFeed],
    call: "chortle",
    gestation_days: 30,
    max_age_years: 18.0,
};

pub const WEDGE_TAILED_EAGLE: SpeciesTraits = SpeciesTraits {
    name: "Wedge-tailed Eagle",
    category: SpeciesCategory::Bird,
    accepted_foods: &[FoodKind::MeatyFeed],
    call: "screech",
    gestation_days: 20,
    max_age_years: 15.0,
};

/// Fallback record for species the registry does not know
pub const GENERIC_MAMMAL: SpeciesTraits = SpeciesTraits {
    name: "Mammal",
    category: SpeciesCategory::Mammal,
    accepted_foods: &[FoodKind::HerbivoreFeed, FoodKind::GeneralFeed],
    call: "a low mammalian grunt",
    gestation_days: 60,
    max_age_years: 25.0,
};

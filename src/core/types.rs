//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for creatures (assigned by the factory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

/// Unique identifier for habitats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitatId(pub u32);

/// Unique identifier for health observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

/// Biological sex, assigned randomly at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Food kinds stocked in the zoo inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Eucalyptus,
    HerbivoreFeed,
    Seeds,
    MeatyFeed,
    GeneralFeed,
}

impl FoodKind {
    pub const ALL: [FoodKind; 5] = [
        FoodKind::Eucalyptus,
        FoodKind::HerbivoreFeed,
        FoodKind::Seeds,
        FoodKind::MeatyFeed,
        FoodKind::GeneralFeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodKind::Eucalyptus => "eucalyptus",
            FoodKind::HerbivoreFeed => "herbivore-feed",
            FoodKind::Seeds => "seeds",
            FoodKind::MeatyFeed => "meaty-feed",
            FoodKind::GeneralFeed => "general-feed",
        }
    }

    pub fn parse(input: &str) -> Option<FoodKind> {
        let normalized = input.trim().to_lowercase().replace('_', "-");
        Self::ALL.iter().copied().find(|k| k.label() == normalized)
    }
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Medicine kinds stocked in the zoo inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicineKind {
    BasicMed,
}

impl MedicineKind {
    pub const ALL: [MedicineKind; 1] = [MedicineKind::BasicMed];

    pub fn label(&self) -> &'static str {
        match self {
            MedicineKind::BasicMed => "basic-med",
        }
    }
}

impl fmt::Display for MedicineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Habitat environment tag; drives species compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitatType {
    Forest,
    Grassland,
    Aviary,
}

impl HabitatType {
    pub fn label(&self) -> &'static str {
        match self {
            HabitatType::Forest => "forest",
            HabitatType::Grassland => "grassland",
            HabitatType::Aviary => "aviary",
        }
    }

    pub fn parse(input: &str) -> Option<HabitatType> {
        match input.trim().to_lowercase().as_str() {
            "forest" => Some(HabitatType::Forest),
            "grassland" => Some(HabitatType::Grassland),
            "aviary" => Some(HabitatType::Aviary),
            _ => None,
        }
    }
}

impl fmt::Display for HabitatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Broad species category used for habitat compatibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesCategory {
    Mammal,
    Marsupial,
    Bird,
}

impl SpeciesCategory {
    /// Marsupials count as mammals for habitat compatibility
    pub fn is_mammal(&self) -> bool {
        matches!(self, SpeciesCategory::Mammal | SpeciesCategory::Marsupial)
    }
}

//! Shared types, configuration and error handling

pub mod config;
pub mod error;
pub mod types;

pub use config::ZooConfig;
pub use error::{Result, ZooError};
pub use types::{CreatureId, FoodKind, HabitatId, HabitatType, MedicineKind, ObserverId, Sex, SpeciesCategory};

//! Error taxonomy for the zoo engine

use thiserror::Error;

use crate::core::types::{CreatureId, FoodKind, HabitatId, HabitatType};

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("insufficient funds: need ${needed:.2}, have ${available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("habitat is at capacity ({0})")]
    CapacityExceeded(usize),

    #[error("a {species} cannot live in a {habitat} habitat")]
    SpeciesIncompatible { species: String, habitat: HabitatType },

    #[error("different species cannot breed")]
    SpeciesMismatch,

    #[error("no {0} left in stock")]
    OutOfStock(FoodKind),

    #[error("no medicine available")]
    NoMedicine,

    #[error("habitat not found: {0:?}")]
    UnknownHabitat(HabitatId),

    #[error("creature not found: {0:?}")]
    UnknownCreature(CreatureId),
}

pub type Result<T> = std::result::Result<T, ZooError>;

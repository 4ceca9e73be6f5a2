//! Menagerie - Day-Tick Zoo Management Simulation

pub mod core;
pub mod creature;
pub mod economy;
pub mod habitat;
pub mod zoo;

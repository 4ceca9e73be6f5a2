//! Money and supplies

pub mod inventory;
pub mod ledger;

pub use inventory::Inventory;
pub use ledger::{Ledger, LedgerEntry};

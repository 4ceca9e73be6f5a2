//! Resource inventory - quantity per resource kind

use ahash::AHashMap;
use serde::Serialize;
use std::hash::Hash;

/// A quantity map for one class of resource (food or medicine)
///
/// Removal is not guarded against underflow; callers check availability
/// with `has` before taking stock.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory<K: Eq + Hash> {
    stock: AHashMap<K, u32>,
}

impl<K: Eq + Hash + Copy> Inventory<K> {
    pub fn new() -> Self {
        Self { stock: AHashMap::new() }
    }

    pub fn quantity(&self, kind: K) -> u32 {
        self.stock.get(&kind).copied().unwrap_or(0)
    }

    pub fn has(&self, kind: K) -> bool {
        self.quantity(kind) > 0
    }

    pub fn add(&mut self, kind: K, quantity: u32) {
        *self.stock.entry(kind).or_insert(0) += quantity;
    }

    /// Remove up to `quantity` units, returning the amount actually removed
    pub fn remove(&mut self, kind: K, quantity: u32) -> u32 {
        match self.stock.get_mut(&kind) {
            Some(current) => {
                let removed = quantity.min(*current);
                *current -= removed;
                removed
            }
            None => 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.stock.iter().map(|(&k, &q)| (k, q))
    }

    pub fn total(&self) -> u32 {
        self.stock.values().sum()
    }
}

impl<K: Eq + Hash + Copy> Default for Inventory<K> {
    fn default() -> Self {
        Self::new()
    }
}

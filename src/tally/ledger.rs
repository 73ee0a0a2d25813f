use crate::model::{capitalize, normalize_key};
use std::collections::BTreeMap;

/// Outcome of a removal attempt. Removing from an absent key is an explicit
/// variant, not a caught lookup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock was decremented; `remaining == 0` means the key was deleted.
    Removed { remaining: u64 },
    /// The item has no entry at all.
    NotInStock,
    /// Less on hand than requested; nothing was removed.
    Insufficient { available: u64 },
}

/// The stock map: normalized item key → quantity on hand.
///
/// Invariant: no entry ever holds quantity 0. A removal that would leave 0
/// deletes the key, and a wholesale [`Ledger::replace`] drops zero entries.
///
/// Backed by a `BTreeMap`, so reports and low-stock listings iterate in
/// lexicographic key order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    stock: BTreeMap<String, u64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment stock for `item` by `qty` (creating the entry at `qty`).
    /// Returns the new total for the normalized key, or `None` if the total
    /// would exceed `u64::MAX`; on overflow the ledger is untouched.
    pub fn add(&mut self, item: &str, qty: u64) -> Option<u64> {
        let key = normalize_key(item);
        let current = self.stock.get(&key).copied().unwrap_or(0);
        let total = current.checked_add(qty)?;
        self.stock.insert(key, total);
        Some(total)
    }

    /// Decrement stock for `item` by `qty`. Partial removal never happens:
    /// either the full quantity comes off or the ledger is untouched.
    pub fn remove(&mut self, item: &str, qty: u64) -> RemoveOutcome {
        let key = normalize_key(item);
        let Some(available) = self.stock.get(&key).copied() else {
            return RemoveOutcome::NotInStock;
        };
        if available < qty {
            return RemoveOutcome::Insufficient { available };
        }

        let remaining = available - qty;
        if remaining == 0 {
            self.stock.remove(&key);
        } else {
            self.stock.insert(key, remaining);
        }
        RemoveOutcome::Removed { remaining }
    }

    /// Quantity on hand for `item`; 0 for unknown items.
    pub fn quantity(&self, item: &str) -> u64 {
        self.stock.get(&normalize_key(item)).copied().unwrap_or(0)
    }

    /// Capitalized names of every item strictly below `threshold`,
    /// in key order.
    pub fn low_stock(&self, threshold: u64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, &qty)| qty < threshold)
            .map(|(key, _)| capitalize(key))
            .collect()
    }

    /// Replace the whole map with a loaded snapshot (no merge).
    pub fn replace(&mut self, mut stock: BTreeMap<String, u64>) {
        // Uphold the no-zero-entries invariant even for hand-edited files.
        stock.retain(|_, qty| *qty > 0);
        self.stock = stock;
    }

    pub fn stock(&self) -> &BTreeMap<String, u64> {
        &self.stock
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }
}

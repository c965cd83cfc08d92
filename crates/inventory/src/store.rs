use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use stockbook_core::{DomainError, DomainResult};

use crate::log::MutationLog;

/// Default threshold for the low-stock query.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory item/quantity store.
///
/// Wraps a `BTreeMap` so iteration, the report, and the persisted
/// snapshot are all in stable (lexicographic) key order. `remove`
/// enforces the invariant that no retained key maps to a quantity at or
/// below zero; `add` doubles as the decrement path (negative quantities)
/// and may transiently leave a zero or negative value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from untrusted snapshot entries.
    ///
    /// Entries with a blank name or a non-positive quantity are skipped
    /// with a warning each; everything else is kept as-is. This is the
    /// validation boundary for deserialized external data.
    pub fn from_snapshot(entries: BTreeMap<String, i64>) -> Self {
        let mut items = BTreeMap::new();
        for (name, quantity) in entries {
            if name.trim().is_empty() {
                tracing::warn!("skipping snapshot entry with blank item name");
                continue;
            }
            if quantity <= 0 {
                tracing::warn!(
                    "skipping snapshot entry {name:?} with non-positive quantity {quantity}"
                );
                continue;
            }
            items.insert(name, quantity);
        }
        Self { items }
    }

    /// Borrow the underlying name-to-quantity map, in key order.
    pub fn snapshot(&self) -> &BTreeMap<String, i64> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Iterate items and quantities in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Add `quantity` of `item` (negative quantities decrement).
    ///
    /// Never returns an error: a blank item name is a warning and a
    /// no-op; accumulator overflow is an error notice and a no-op. On
    /// success a timestamped entry is appended to the optional
    /// caller-owned log and an info notice is emitted.
    pub fn add(&mut self, item: &str, quantity: i64, log: Option<&mut MutationLog>) {
        if let Err(err) = self.try_add(item, quantity, log) {
            notice(&err);
        }
    }

    fn try_add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut MutationLog>,
    ) -> DomainResult<()> {
        validate_item_name(item)?;

        let current = self.items.get(item).copied().unwrap_or(0);
        let updated = current.checked_add(quantity).ok_or_else(|| {
            DomainError::overflow(format!("adding {quantity} of {item} to {current}"))
        })?;

        self.items.insert(item.to_string(), updated);

        if let Some(log) = log {
            log.record(item, quantity, Utc::now());
        }
        tracing::info!("added {quantity} of {item}");
        Ok(())
    }

    /// Remove `quantity` of `item`.
    ///
    /// Never returns an error: a blank name or an absent item is a
    /// warning and a no-op; overflow is an error notice and a no-op.
    /// If the remaining quantity drops to zero or below, the key is
    /// deleted and an info notice is emitted; otherwise the reduced
    /// quantity is retained silently.
    pub fn remove(&mut self, item: &str, quantity: i64) {
        if let Err(err) = self.try_remove(item, quantity) {
            notice(&err);
        }
    }

    fn try_remove(&mut self, item: &str, quantity: i64) -> DomainResult<()> {
        validate_item_name(item)?;

        let current = *self
            .items
            .get(item)
            .ok_or_else(|| DomainError::not_found(format!("cannot remove absent item {item:?}")))?;

        let updated = current.checked_sub(quantity).ok_or_else(|| {
            DomainError::overflow(format!("removing {quantity} of {item} from {current}"))
        })?;

        if updated <= 0 {
            self.items.remove(item);
            tracing::info!("removed {item} from stock");
        } else {
            self.items.insert(item.to_string(), updated);
        }
        Ok(())
    }

    /// Current quantity of `item`, or 0 when absent. Pure, never fails.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items with a quantity strictly below `threshold`, in key order.
    pub fn low_items(&self, threshold: i64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

fn validate_item_name(item: &str) -> DomainResult<()> {
    if item.trim().is_empty() {
        return Err(DomainError::validation("item name cannot be blank"));
    }
    Ok(())
}

/// Route an absorbed failure onto the log channel at its severity.
fn notice(err: &DomainError) {
    match err {
        DomainError::Validation(_) | DomainError::NotFound(_) => tracing::warn!("{err}"),
        DomainError::Overflow(_) => tracing::error!("{err}"),
    }
}

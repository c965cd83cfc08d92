//! Caller-owned mutation log.

use std::fmt;

use chrono::{DateTime, Utc};

/// One recorded stock addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationLogEntry {
    pub occurred_at: DateTime<Utc>,
    pub item: String,
    pub quantity: i64,
}

impl fmt::Display for MutationLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.occurred_at, self.quantity, self.item
        )
    }
}

/// Append-only record of stock additions.
///
/// Owned by the caller, which creates it and hands the store a mutable
/// borrow per `add` call. The store appends on every successful add and
/// never reads the log back. Insertion order is preserved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MutationLog {
    entries: Vec<MutationLogEntry>,
}

impl MutationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, item: &str, quantity: i64, occurred_at: DateTime<Utc>) {
        self.entries.push(MutationLogEntry {
            occurred_at,
            item: item.to_string(),
            quantity,
        });
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> &[MutationLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

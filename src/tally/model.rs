use chrono::{DateTime, Utc};
use std::fmt;

/// Canonical form of an item name: trimmed and lowercased.
/// Every ledger lookup and mutation goes through this.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Display form of a normalized key: first character uppercased.
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One record in the run log, produced by every successful add.
/// Lives only for the duration of a run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub qty: u64,
    pub item: String,
}

impl LogEntry {
    pub fn added(qty: u64, key: &str) -> Self {
        Self {
            at: Utc::now(),
            qty,
            item: capitalize(key),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.qty, self.item)
    }
}

use super::SnapshotStore;
use crate::error::{Result, TallyError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Holds at most one snapshot; does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<BTreeMap<String, u64>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<BTreeMap<String, u64>> {
        self.snapshot
            .clone()
            .ok_or_else(|| TallyError::SnapshotMissing(PathBuf::from("<memory>")))
    }

    fn save(&mut self, stock: &BTreeMap<String, u64>) -> Result<()> {
        self.snapshot = Some(stock.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, key: &str, qty: u64) -> Self {
            let mut stock = self.store.load().unwrap_or_default();
            stock.insert(key.to_string(), qty);
            self.store.save(&stock).unwrap();
            self
        }
    }
}

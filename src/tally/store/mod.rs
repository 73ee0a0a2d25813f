//! # Storage Layer
//!
//! The [`SnapshotStore`] trait abstracts where the inventory snapshot lives.
//!
//! Storage is behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. One JSON object
//!   mapping normalized item key to quantity, pretty-printed with 4-space
//!   indentation for hand inspection:
//!
//!   ```text
//!   {
//!       "apple": 7,
//!       "banana": 5
//!   }
//!   ```
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast isolated test execution.
//!
//! Snapshots are exchanged whole: `load` reads the entire file, `save`
//! overwrites it. There is no merge, no streaming, and no atomic
//! rename-on-write.

use crate::error::Result;
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Read the entire snapshot into a stock map.
    fn load(&self) -> Result<BTreeMap<String, u64>>;

    /// Overwrite the snapshot with the full stock map.
    fn save(&mut self, stock: &BTreeMap<String, u64>) -> Result<()>;

    /// Human-readable location of the snapshot, used in console messages.
    fn location(&self) -> String;
}

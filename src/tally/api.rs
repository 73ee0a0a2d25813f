//! # API Facade
//!
//! A **thin facade** over the command layer: the single entry point for all
//! tally operations, regardless of the UI driving them.
//!
//! The facade owns the in-memory [`Ledger`] and the per-run log, dispatches
//! to the appropriate command function, and returns structured
//! `Result<CmdResult>` values. It performs no business logic, no I/O beyond
//! the store it is given, and no presentation.
//!
//! `TallyApi<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `TallyApi<FileStore>`
//! - Testing: `TallyApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::model::LogEntry;
use crate::store::SnapshotStore;

/// The main API facade for tally operations.
///
/// All UI clients (CLI, future surfaces) should interact through this API.
pub struct TallyApi<S: SnapshotStore> {
    store: S,
    ledger: Ledger,
    run_log: Vec<LogEntry>,
}

impl<S: SnapshotStore> TallyApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ledger: Ledger::new(),
            run_log: Vec::new(),
        }
    }

    pub fn add_stock(&mut self, item: &str, qty: i64) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.ledger, item, qty, &mut self.run_log)
    }

    pub fn remove_stock(&mut self, item: &str, qty: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.ledger, item, qty)
    }

    pub fn quantity(&self, item: &str) -> Result<commands::CmdResult> {
        commands::query::run(&self.ledger, item)
    }

    pub fn low_stock(&self, threshold: u64) -> Result<commands::CmdResult> {
        commands::low::run(&self.ledger, threshold)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.ledger)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.ledger)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.ledger)
    }

    pub fn run_log(&self) -> &[LogEntry] {
        &self.run_log
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockLine};

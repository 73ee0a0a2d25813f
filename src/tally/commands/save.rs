use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::store::SnapshotStore;

/// Serialize the whole ledger over the snapshot. A failed save is reported
/// and swallowed; the in-memory ledger is the source of truth either way.
pub fn run<S: SnapshotStore>(store: &mut S, ledger: &Ledger) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let location = store.location();

    match store.save(ledger.stock()) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Data saved successfully to {}.",
            location
        ))),
        Err(e) => result.add_message(CmdMessage::error(format!(
            "Critical Error: Could not save data: {}",
            e
        ))),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, load};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn save_then_load_reproduces_the_ledger() {
        let mut store = InMemoryStore::new();
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "apple", 10, &mut logs).unwrap();
        add::run(&mut ledger, "banana", 7, &mut logs).unwrap();

        let result = run(&mut store, &ledger).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Data saved successfully to <memory>."
        );

        let mut reloaded = Ledger::new();
        load::run(&store, &mut reloaded).unwrap();
        assert_eq!(reloaded, ledger);
    }
}

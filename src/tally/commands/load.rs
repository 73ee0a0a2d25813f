use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::ledger::Ledger;
use crate::store::SnapshotStore;

/// Replace the ledger wholesale from the snapshot. A missing or corrupt
/// snapshot is reported as a message and leaves the ledger untouched; only
/// unexpected I/O failures propagate as `Err`.
pub fn run<S: SnapshotStore>(store: &S, ledger: &mut Ledger) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let location = store.location();

    match store.load() {
        Ok(stock) => {
            ledger.replace(stock);
            result.add_message(CmdMessage::info(format!(
                "Data loaded successfully from {}.",
                location
            )));
        }
        Err(TallyError::SnapshotMissing(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "Warning: File {} not found. Starting with empty inventory.",
                location
            )));
        }
        Err(TallyError::Serialization(_)) => {
            result.add_message(CmdMessage::error(format!(
                "Error: Failed to decode JSON from {}. File might be corrupted.",
                location
            )));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_the_ledger_wholesale() {
        let fixture = StoreFixture::new().with_item("apple", 7).with_item("banana", 5);
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "stale", 99, &mut logs).unwrap();

        let result = run(&fixture.store, &mut ledger).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Data loaded successfully from <memory>."
        );
        assert_eq!(ledger.quantity("apple"), 7);
        assert_eq!(ledger.quantity("stale"), 0);
    }

    #[test]
    fn missing_snapshot_warns_and_keeps_ledger() {
        let store = InMemoryStore::new();
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "apple", 3, &mut logs).unwrap();

        let result = run(&store, &mut ledger).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Warning: File <memory> not found. Starting with empty inventory."
        );
        assert_eq!(ledger.quantity("apple"), 3);
    }
}

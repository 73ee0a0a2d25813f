use crate::commands::{CmdMessage, CmdResult, StockLine};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::model::{capitalize, normalize_key, LogEntry};

/// Add stock for an item. A non-positive quantity is rejected with a warning
/// and leaves the ledger untouched; success additionally records a run-log
/// entry in the caller-supplied sink.
pub fn run(
    ledger: &mut Ledger,
    item: &str,
    qty: i64,
    logs: &mut Vec<LogEntry>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if qty <= 0 {
        result.add_message(CmdMessage::warning(format!(
            "Warning: Attempted to add item with invalid type or quantity: item={}, qty={}",
            item, qty
        )));
        return Ok(result);
    }

    let qty = qty as u64;
    let key = normalize_key(item);
    let Some(total) = ledger.add(item, qty) else {
        result.add_message(CmdMessage::warning(format!(
            "Warning: Cannot add {} of {}, stock count would overflow.",
            qty,
            capitalize(&key)
        )));
        return Ok(result);
    };
    logs.push(LogEntry::added(qty, &key));

    Ok(result.with_affected(vec![StockLine {
        name: capitalize(&key),
        qty: total,
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn adds_and_logs() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();

        let result = run(&mut ledger, "Apple", 10, &mut logs).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Apple");
        assert_eq!(result.affected[0].qty, 10);

        assert_eq!(ledger.quantity("apple"), 10);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].item, "Apple");
        assert_eq!(logs[0].qty, 10);
    }

    #[test]
    fn trimmed_and_cased_variants_hit_one_key() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();

        run(&mut ledger, "Apple", 2, &mut logs).unwrap();
        run(&mut ledger, " apple ", 3, &mut logs).unwrap();

        assert_eq!(ledger.quantity("apple"), 5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn zero_and_negative_quantities_warn_and_no_op() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();

        for qty in [0, -2] {
            let result = run(&mut ledger, "orange", qty, &mut logs).unwrap();
            assert_eq!(result.messages.len(), 1);
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
            assert_eq!(
                result.messages[0].content,
                format!(
                    "Warning: Attempted to add item with invalid type or quantity: item=orange, qty={}",
                    qty
                )
            );
            assert!(result.affected.is_empty());
        }

        assert!(ledger.is_empty());
        assert!(logs.is_empty());
    }

    #[test]
    fn overflowing_add_warns_and_no_ops() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();

        run(&mut ledger, "apple", i64::MAX, &mut logs).unwrap();
        run(&mut ledger, "apple", i64::MAX, &mut logs).unwrap();
        let result = run(&mut ledger, "apple", i64::MAX, &mut logs).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            format!(
                "Warning: Cannot add {} of Apple, stock count would overflow.",
                i64::MAX
            )
        );
        assert!(result.affected.is_empty());
        assert_eq!(ledger.quantity("apple"), i64::MAX as u64 * 2);
        assert_eq!(logs.len(), 2);
    }
}

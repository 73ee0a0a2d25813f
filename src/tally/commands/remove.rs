use crate::commands::{CmdMessage, CmdResult, StockLine};
use crate::error::Result;
use crate::ledger::{Ledger, RemoveOutcome};
use crate::model::{capitalize, normalize_key};

/// Remove stock for an item. Never partial: either the full quantity comes
/// off or the operation warns and leaves the ledger untouched.
pub fn run(ledger: &mut Ledger, item: &str, qty: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if qty <= 0 {
        result.add_message(CmdMessage::warning(format!(
            "Warning: Attempted to remove item with invalid type or quantity: item={}, qty={}",
            item, qty
        )));
        return Ok(result);
    }

    let qty = qty as u64;
    let key = normalize_key(item);
    match ledger.remove(item, qty) {
        RemoveOutcome::Removed { remaining } => Ok(result.with_affected(vec![StockLine {
            name: capitalize(&key),
            qty: remaining,
        }])),
        RemoveOutcome::NotInStock => {
            result.add_message(CmdMessage::warning(format!(
                "Warning: Cannot remove {}, item is not in stock.",
                capitalize(&key)
            )));
            Ok(result)
        }
        RemoveOutcome::Insufficient { available } => {
            result.add_message(CmdMessage::warning(format!(
                "Warning: Only {} of {} available, cannot remove {}.",
                available,
                capitalize(&key),
                qty
            )));
            Ok(result)
        }
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::ledger::Ledger;

/// Quantity on hand for an item; unknown items report 0, no warning.
pub fn run(ledger: &Ledger, item: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_quantity(ledger.quantity(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn known_item_reports_its_quantity() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "apple", 7, &mut logs).unwrap();

        let result = run(&ledger, " APPLE ").unwrap();
        assert_eq!(result.quantity, Some(7));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_item_reports_zero() {
        let ledger = Ledger::new();
        let result = run(&ledger, "ghost").unwrap();
        assert_eq!(result.quantity, Some(0));
    }
}

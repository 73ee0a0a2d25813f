use crate::commands::CmdResult;
use crate::error::Result;
use crate::ledger::Ledger;

/// Items strictly below the threshold, capitalized, in key order.
pub fn run(ledger: &Ledger, threshold: u64) -> Result<CmdResult> {
    Ok(CmdResult::default().with_low_items(ledger.low_stock(threshold)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn lists_only_items_below_threshold() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "apple", 10, &mut logs).unwrap();
        add::run(&mut ledger, "banana", 7, &mut logs).unwrap();
        add::run(&mut ledger, "carrot", 4, &mut logs).unwrap();

        let result = run(&ledger, 5).unwrap();
        assert_eq!(result.low_items, vec!["Carrot"]);
    }

    #[test]
    fn threshold_is_strict() {
        let mut ledger = Ledger::new();
        let mut logs = Vec::new();
        add::run(&mut ledger, "banana", 5, &mut logs).unwrap();

        let result = run(&ledger, 5).unwrap();
        assert!(result.low_items.is_empty());
    }
}

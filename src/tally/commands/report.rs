use crate::commands::{CmdResult, StockLine};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::model::capitalize;

/// Full inventory listing, capitalized, in key order. An empty payload means
/// an empty inventory; rendering is the CLI's concern.
pub fn run(ledger: &Ledger) -> Result<CmdResult> {
    let stock = ledger
        .stock()
        .iter()
        .map(|(key, &qty)| StockLine {
            name: capitalize(key),
            qty,
        })
        .collect();
    Ok(CmdResult::default().with_stock(stock))
}

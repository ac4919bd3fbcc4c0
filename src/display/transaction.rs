//! Transaction register formatting

use crate::display::{separator, truncate};
use crate::models::{Transaction, DATE_FORMAT};

/// Format a single transaction as a register row
pub fn format_row(txn: &Transaction) -> String {
    format!(
        "{} {:7} {:>12} {:16} {}",
        txn.date.format(DATE_FORMAT),
        txn.kind.to_string(),
        txn.amount.to_string(),
        truncate(&txn.category, 16),
        txn.description
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:>12} {:16} {}\n",
        "date", "type", "amount", "category", "description"
    ));
    output.push_str(&separator(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_row(txn));
        output.push('\n');
    }

    output
}

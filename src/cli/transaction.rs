//! CLI commands for recording and viewing transactions

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::display::format_register;
use crate::error::TallyResult;
use crate::models::Transaction;
use crate::storage::LedgerStore;

/// Validate raw input, append the record, and log it
pub fn handle_add(
    store: &mut dyn LedgerStore,
    audit: &AuditLogger,
    date: &str,
    kind: &str,
    amount: &str,
    category: &str,
    description: &str,
) -> TallyResult<()> {
    let txn = Transaction::from_input(date, kind, amount, category, description)?;
    store.append(&txn)?;
    audit.log(&AuditEntry::new(
        AuditAction::TransactionAdded,
        txn.to_string(),
    ))?;
    println!("Transaction added: {txn}");
    Ok(())
}

/// Print the full transaction register
pub fn handle_list(store: &dyn LedgerStore) -> TallyResult<()> {
    let records = store.load_all()?;
    print!("{}", format_register(&records));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLedger;
    use tempfile::TempDir;

    #[test]
    fn test_handle_add_validates_and_appends() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(dir.path().join("audit.log"));
        let mut store = MemoryLedger::new();

        handle_add(
            &mut store,
            &audit,
            "2025-06-10",
            "EXPENSE",
            "45.50",
            "Food",
            "lunch",
        )
        .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Food");
        assert_eq!(audit.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_handle_add_rejects_bad_kind_without_appending() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(dir.path().join("audit.log"));
        let mut store = MemoryLedger::new();

        let err = handle_add(&mut store, &audit, "2025-06-10", "transfer", "5", "", "")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.load_all().unwrap().is_empty());
        assert!(audit.read_all().unwrap().is_empty());
    }
}

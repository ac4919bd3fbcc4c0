//! In-memory ledger store
//!
//! Backs the same [`LedgerStore`] contract with a plain vec. Used by tests
//! and by library consumers that want the aggregation logic without a file.

use crate::error::TallyResult;
use crate::models::Transaction;

use super::LedgerStore;

/// Vec-backed [`LedgerStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Vec<Transaction>,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory ledger pre-populated with records
    pub fn with_records(records: Vec<Transaction>) -> Self {
        Self { records }
    }
}

impl LedgerStore for MemoryLedger {
    fn ensure_initialized(&self) -> TallyResult<()> {
        Ok(())
    }

    fn append(&mut self, txn: &Transaction) -> TallyResult<()> {
        self.records.push(txn.clone());
        Ok(())
    }

    fn load_all(&self) -> TallyResult<Vec<Transaction>> {
        let mut records = self.records.clone();
        records.sort_by_key(|txn| txn.date);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_load() {
        let mut store = MemoryLedger::new();
        let txn =
            Transaction::from_input("2025-06-10", "income", "100.00", "Salary", "").unwrap();
        store.append(&txn).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![txn]);
    }

    #[test]
    fn test_load_sorted_by_date() {
        let a = Transaction::from_input("2025-06-12", "expense", "1.00", "A", "").unwrap();
        let b = Transaction::from_input("2025-06-10", "expense", "1.00", "B", "").unwrap();
        let store = MemoryLedger::with_records(vec![a, b]);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].category, "B");
        assert_eq!(loaded[1].category, "A");
    }
}

//! CSV-backed ledger store
//!
//! One row per transaction under the fixed header
//! `date,type,amount,category,description`. Writes are append-only: adding a
//! record never rewrites existing rows, so a failed append leaves prior
//! state intact.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::{parse_date, Money, Transaction, TransactionKind, DATE_FORMAT};

use super::LedgerStore;

/// Column header of the ledger file
pub const LEDGER_HEADER: [&str; 5] = ["date", "type", "amount", "category", "description"];

/// Raw row shape at the file boundary
///
/// Everything is text here; conversion into [`Transaction`] is where dates
/// are normalized, kind is lower-cased, and amounts are coerced.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    date: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
}

impl LedgerRow {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            kind: txn.kind.to_string(),
            amount: txn.amount.to_string(),
            category: txn.category.clone(),
            description: txn.description.clone(),
        }
    }

    fn into_transaction(self) -> TallyResult<Transaction> {
        let date = parse_date(&self.date)?;
        let kind: TransactionKind = self.kind.parse()?;
        let amount = Money::parse(&self.amount)
            .map_err(|e| TallyError::Validation(e.to_string()))?;
        Ok(Transaction::new(date, kind, amount, self.category, self.description))
    }
}

/// File-backed [`LedgerStore`] implementation
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Create a ledger store over the given file path
    ///
    /// The file itself is created lazily by [`LedgerStore::ensure_initialized`].
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LedgerStore for CsvLedger {
    fn ensure_initialized(&self) -> TallyResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    TallyError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(LEDGER_HEADER)?;
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to write header: {}", e)))?;
        Ok(())
    }

    fn append(&mut self, txn: &Transaction) -> TallyResult<()> {
        self.ensure_initialized()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(LedgerRow::from_transaction(txn))?;
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to write row: {}", e)))?;
        Ok(())
    }

    fn load_all(&self) -> TallyResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.deserialize::<LedgerRow>() {
            records.push(row?.into_transaction()?);
        }

        // Stable: rows sharing a date keep their file order
        records.sort_by_key(|txn| txn.date);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ledger(dir: &TempDir) -> CsvLedger {
        CsvLedger::new(dir.path().join("transactions.csv"))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ensure_initialized_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let store = ledger(&dir);

        store.ensure_initialized().unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, "date,type,amount,category,description\n");

        // Idempotent: a second call never duplicates the header
        store.ensure_initialized().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), first);
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = ledger(&dir);

        let txn = Transaction::from_input("2025-06-10", "expense", "45.50", "Food", "lunch")
            .unwrap();
        store.append(&txn).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![txn]);
    }

    #[test]
    fn test_append_does_not_rewrite_existing_rows() {
        let dir = TempDir::new().unwrap();
        let mut store = ledger(&dir);

        let first =
            Transaction::from_input("2025-06-10", "expense", "45.50", "Food", "").unwrap();
        store.append(&first).unwrap();
        let after_first = fs::read_to_string(store.path()).unwrap();

        let second =
            Transaction::from_input("2025-06-11", "income", "100.00", "Salary", "").unwrap();
        store.append(&second).unwrap();
        let after_second = fs::read_to_string(store.path()).unwrap();

        assert!(after_second.starts_with(&after_first));
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_mixed_case_kind_round_trips_lowercase() {
        let dir = TempDir::new().unwrap();
        let mut store = ledger(&dir);

        let txn =
            Transaction::from_input("2025-06-10", "EXPENSE", "5.00", "Food", "").unwrap();
        store.append(&txn).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].kind, TransactionKind::Expense);
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(",expense,"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ledger(&dir);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_header_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ledger(&dir);
        store.ensure_initialized().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_sorts_by_date_stable() {
        let dir = TempDir::new().unwrap();
        let mut store = ledger(&dir);

        for (d, cat) in [
            ("2025-06-12", "second"),
            ("2025-06-10", "first"),
            ("2025-06-12", "third"),
        ] {
            let txn = Transaction::from_input(d, "expense", "1.00", cat, "").unwrap();
            store.append(&txn).unwrap();
        }

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].category, "first");
        // Equal dates keep their file order
        assert_eq!(loaded[1].category, "second");
        assert_eq!(loaded[2].category, "third");
    }

    #[test]
    fn test_load_normalizes_tolerant_rows() {
        let dir = TempDir::new().unwrap();
        let store = ledger(&dir);
        fs::write(
            store.path(),
            "date,type,amount,category,description\n10/06/2025,EXPENSE,12.5,,\n",
        )
        .unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded[0].date, date(2025, 6, 10));
        assert_eq!(loaded[0].kind, TransactionKind::Expense);
        assert_eq!(loaded[0].amount, Money::from_cents(1250));
        assert_eq!(loaded[0].category, "uncategorized");
        assert_eq!(loaded[0].description, "");
    }

    #[test]
    fn test_load_rejects_non_numeric_amount() {
        let dir = TempDir::new().unwrap();
        let store = ledger(&dir);
        fs::write(
            store.path(),
            "date,type,amount,category,description\n2025-06-10,expense,lots,Food,\n",
        )
        .unwrap();

        let err = store.load_all().unwrap_err();
        assert!(err.is_validation());
    }
}

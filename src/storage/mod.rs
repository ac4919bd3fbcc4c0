//! Storage layer for tally-cli
//!
//! The ledger is an append-only, row-oriented CSV file. Call sites depend on
//! the [`LedgerStore`] capability rather than a file path, so tests and
//! library consumers can substitute the in-memory implementation.

pub mod csv_ledger;
pub mod file_io;
pub mod memory;

pub use csv_ledger::CsvLedger;
pub use memory::MemoryLedger;

use crate::error::TallyResult;
use crate::models::Transaction;

/// Capability contract for the transaction store
///
/// Each operation performs one full pass against the backing store; nothing
/// is cached between calls.
pub trait LedgerStore {
    /// Create the backing store with its header if absent; idempotent
    fn ensure_initialized(&self) -> TallyResult<()>;

    /// Append exactly one validated record
    fn append(&mut self, txn: &Transaction) -> TallyResult<()>;

    /// Read every record, normalized and stable-sorted ascending by date
    ///
    /// A missing or empty store yields an empty vec, not an error.
    fn load_all(&self) -> TallyResult<Vec<Transaction>>;
}

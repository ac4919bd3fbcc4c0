//! Core data models for tally-cli
//!
//! Contains the typed ledger record and its building blocks: money amounts,
//! transaction kind, and the date normalizer.

pub mod dates;
pub mod money;
pub mod transaction;

pub use dates::{parse_date, DATE_FORMAT};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, DEFAULT_CATEGORY};

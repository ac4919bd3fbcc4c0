//! tally-cli - command-line personal finance ledger
//!
//! Appends dated income/expense records to a flat CSV file, derives category
//! and weekly aggregates, renders terminal charts, and exports weekly
//! summaries for external review.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, date parsing)
//! - `storage`: Append-only CSV ledger behind the `LedgerStore` trait
//! - `reports`: Category and weekly aggregation (pure functions)
//! - `export`: Weekly summary and bullet file exports
//! - `display`: Register view and text charts
//! - `audit`: Append-only audit log of mutating operations
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::reports::{category_summary, weekly_summaries};
//! use tally_cli::storage::{LedgerStore, MemoryLedger};
//!
//! let records = MemoryLedger::new().load_all()?;
//! let spending = category_summary(&records, None, None, Some(10));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TallyError, TallyResult};

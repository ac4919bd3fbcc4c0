//! Derived aggregates over the ledger
//!
//! Pure functions over an already-loaded record slice; store access stays
//! with the caller.

pub mod category;
pub mod weekly;

pub use category::{category_summary, CategoryTotal};
pub use weekly::{week_bounds, weekly_summaries, WeeklySummary};

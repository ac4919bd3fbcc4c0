//! Export functionality
//!
//! Serializes derived data to files: weekly summaries as CSV and the static
//! project bullets as plain text. All path-level writes are atomic.

pub mod bullets;
pub mod weekly;

pub use bullets::{export_bullets, write_lines, PROJECT_BULLETS};
pub use weekly::{export_weekly_summaries, write_weekly_summaries};

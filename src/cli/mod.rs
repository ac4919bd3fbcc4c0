//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the storage,
//! report, and export layers.

pub mod export;
pub mod generate;
pub mod menu;
pub mod report;
pub mod transaction;

pub use export::{handle_export_bullets, handle_export_weekly};
pub use generate::handle_generate;
pub use menu::run_menu;
pub use report::{handle_chart_categories, handle_chart_weekly, handle_summary, handle_weekly};
pub use transaction::{handle_add, handle_list};

//! CLI commands for file exports

use std::path::Path;

use chrono::NaiveDate;

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::error::TallyResult;
use crate::export::{export_bullets, export_weekly_summaries};
use crate::reports::weekly_summaries;
use crate::storage::LedgerStore;

/// Export weekly summaries for the last `weeks` weeks to `path`
pub fn handle_export_weekly(
    store: &dyn LedgerStore,
    audit: &AuditLogger,
    weeks: usize,
    today: NaiveDate,
    path: &Path,
) -> TallyResult<()> {
    let records = store.load_all()?;
    let summaries = weekly_summaries(&records, weeks, today);
    export_weekly_summaries(&summaries, path)?;
    audit.log(&AuditEntry::new(
        AuditAction::WeeklySummariesExported,
        path.display().to_string(),
    ))?;
    println!("Weekly summaries exported to {}.", path.display());
    Ok(())
}

/// Export the static project bullets to `path`
pub fn handle_export_bullets(audit: &AuditLogger, path: &Path) -> TallyResult<()> {
    export_bullets(path)?;
    audit.log(&AuditEntry::new(
        AuditAction::BulletsExported,
        path.display().to_string(),
    ))?;
    println!("Project bullets exported to {}.", path.display());
    Ok(())
}

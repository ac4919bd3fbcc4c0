//! Static project-bullet export
//!
//! Writes a fixed set of descriptive lines to a plain text file, one line
//! each, verbatim.

use std::io::Write;
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::storage::file_io::write_bytes_atomic;

/// Resume-ready description of this project
pub const PROJECT_BULLETS: [&str; 3] = [
    "Built a command-line personal finance ledger that records income, expenses, and savings trends, using append-only CSV storage with category-wise spending analysis and automated weekly summary generation.",
    "Developed transaction ingestion, category aggregation, and weekly reporting logic to surface spending patterns and track savings momentum.",
    "Implemented typed CSV persistence with atomic snapshot exports of weekly summaries for external review.",
];

/// Write each line followed by a line terminator, verbatim
pub fn write_lines<W: Write, S: AsRef<str>>(lines: &[S], mut writer: W) -> TallyResult<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }
    Ok(())
}

/// Export the project bullets to a file, atomically
pub fn export_bullets(path: &Path) -> TallyResult<()> {
    let mut buf = Vec::new();
    write_lines(&PROJECT_BULLETS, &mut buf)?;
    write_bytes_atomic(path, &buf)
}

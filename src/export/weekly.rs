//! Weekly summary CSV export
//!
//! Writes a snapshot of weekly aggregates. The exported file is never read
//! back as authoritative state.

use std::io::Write;
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::models::DATE_FORMAT;
use crate::reports::WeeklySummary;
use crate::storage::file_io::write_bytes_atomic;

/// Column header of the export file
pub const SUMMARY_HEADER: [&str; 5] = ["week_start", "week_end", "income", "expense", "net"];

/// Write summaries as CSV: dates in `YYYY-MM-DD`, amounts with exactly two
/// fraction digits
pub fn write_weekly_summaries<W: Write>(
    summaries: &[WeeklySummary],
    writer: W,
) -> TallyResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(SUMMARY_HEADER)
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for s in summaries {
        w.write_record([
            s.week_start.format(DATE_FORMAT).to_string(),
            s.week_end.format(DATE_FORMAT).to_string(),
            s.income.to_string(),
            s.expense.to_string(),
            s.net.to_string(),
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    w.flush().map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

/// Export summaries to a file, atomically (write-temp-then-rename)
pub fn export_weekly_summaries(summaries: &[WeeklySummary], path: &Path) -> TallyResult<()> {
    let mut buf = Vec::new();
    write_weekly_summaries(summaries, &mut buf)?;
    write_bytes_atomic(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summary() -> WeeklySummary {
        WeeklySummary {
            week_start: date(2025, 6, 9),
            week_end: date(2025, 6, 15),
            income: Money::from_cents(1200_00),
            expense: Money::from_cents(450_50),
            net: Money::from_cents(749_50),
        }
    }

    #[test]
    fn test_write_format() {
        let mut buf = Vec::new();
        write_weekly_summaries(&[summary()], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "week_start,week_end,income,expense,net\n\
             2025-06-09,2025-06-15,1200.00,450.50,749.50\n"
        );
    }

    #[test]
    fn test_empty_summaries_write_header_only() {
        let mut buf = Vec::new();
        write_weekly_summaries(&[], &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "week_start,week_end,income,expense,net\n"
        );
    }

    #[test]
    fn test_export_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weekly_summaries.csv");
        export_weekly_summaries(&[summary()], &path).unwrap();

        // Re-parsing the snapshot reproduces the same values to 2 digits
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "2025-06-09");
        assert_eq!(&row[1], "2025-06-15");
        assert_eq!(Money::parse(&row[2]).unwrap(), Money::from_cents(1200_00));
        assert_eq!(Money::parse(&row[3]).unwrap(), Money::from_cents(450_50));
        assert_eq!(Money::parse(&row[4]).unwrap(), Money::from_cents(749_50));
    }
}

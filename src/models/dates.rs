//! Date parsing and formatting
//!
//! Normalizes heterogeneous date text into `NaiveDate` by trying a fixed
//! list of known patterns in priority order. This is a deliberate precedence
//! rule to tolerate common regional entry, not a locale-aware parser.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};

/// Canonical date format used in all files and output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted input patterns, tried in order; first successful parse wins
const INPUT_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Parse date text in one of the supported formats
///
/// Returns `TallyError::InvalidDate` carrying the offending text when no
/// pattern matches.
pub fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    let s = s.trim();
    for fmt in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    Err(TallyError::InvalidDate(s.to_string()))
}

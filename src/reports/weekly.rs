//! Weekly income/expense summaries
//!
//! Buckets records into Monday-to-Sunday calendar weeks anchored at the week
//! containing a reference day, walking backward one week at a time.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Money, Transaction};

/// Income, expense, and net totals for one calendar week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sunday of the week (week_start + 6 days)
    pub week_end: NaiveDate,
    /// Sum of income amounts dated within the week
    pub income: Money,
    /// Sum of expense amounts dated within the week
    pub expense: Money,
    /// income - expense
    pub net: Money,
}

/// Monday and Sunday of the week containing `date`
///
/// Monday is weekday index 0.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// Summaries for the last `weeks` calendar weeks
///
/// Index 0 is the week containing `today`, index `weeks - 1` the oldest.
/// Always produces exactly `weeks` entries; weeks with no matching records
/// come back zero-filled.
pub fn weekly_summaries(
    records: &[Transaction],
    weeks: usize,
    today: NaiveDate,
) -> Vec<WeeklySummary> {
    let (current_monday, _) = week_bounds(today);

    (0..weeks)
        .map(|i| {
            let week_start = current_monday - Duration::weeks(i as i64);
            let week_end = week_start + Duration::days(6);

            let mut income = Money::zero();
            let mut expense = Money::zero();
            for txn in records
                .iter()
                .filter(|t| t.date >= week_start && t.date <= week_end)
            {
                if txn.is_income() {
                    income += txn.amount;
                } else {
                    expense += txn.amount;
                }
            }

            WeeklySummary {
                week_start,
                week_end,
                income,
                expense,
                net: income - expense,
            }
        })
        .collect()
}

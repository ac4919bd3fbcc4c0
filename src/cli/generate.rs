//! Sample data seeding
//!
//! Appends a deterministic batch of demo transactions spanning the recent
//! weeks so summaries and charts have something to show on a fresh install.

use chrono::{Duration, NaiveDate};

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::error::TallyResult;
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::week_bounds;
use crate::storage::LedgerStore;

const SAMPLE_WEEKS: i64 = 12;

/// Base weekly expenses; amounts drift per week so the charts have shape
const EXPENSE_PLAN: [(&str, i64, &str); 5] = [
    ("Groceries", 62_40, "weekly shop"),
    ("Transport", 18_75, "bus and fuel"),
    ("Dining Out", 34_20, "restaurants"),
    ("Entertainment", 27_90, "streaming and outings"),
    ("Bills", 88_10, "utilities"),
];

/// Build the deterministic sample set, anchored at the week containing `today`
pub fn sample_transactions(today: NaiveDate) -> Vec<Transaction> {
    let (current_monday, _) = week_bounds(today);
    let mut records = Vec::new();

    for week in 0..SAMPLE_WEEKS {
        let monday = current_monday - Duration::weeks(SAMPLE_WEEKS - 1 - week);

        records.push(Transaction::new(
            monday,
            TransactionKind::Income,
            Money::from_cents(900_00),
            "Salary",
            "weekly pay",
        ));

        for (slot, (category, base_cents, description)) in EXPENSE_PLAN.iter().enumerate() {
            let day = monday + Duration::days((slot as i64 * 2 + week) % 7);
            let cents = base_cents + ((week * 7 + slot as i64 * 13) % 25) * 100;
            records.push(Transaction::new(
                day,
                TransactionKind::Expense,
                Money::from_cents(cents),
                *category,
                *description,
            ));
        }
    }

    records
}

/// Append the sample set to the store and log the seeding
pub fn handle_generate(
    store: &mut dyn LedgerStore,
    audit: &AuditLogger,
    today: NaiveDate,
) -> TallyResult<()> {
    let records = sample_transactions(today);
    for txn in &records {
        store.append(txn)?;
    }
    audit.log(&AuditEntry::new(
        AuditAction::SampleDataSeeded,
        format!("{} records", records.len()),
    ))?;
    println!("Seeded {} sample transactions.", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::weekly_summaries;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sample_set_is_deterministic() {
        let today = date(2025, 6, 12);
        assert_eq!(sample_transactions(today), sample_transactions(today));
    }

    #[test]
    fn test_sample_set_spans_the_recent_weeks() {
        let today = date(2025, 6, 12);
        let records = sample_transactions(today);
        assert_eq!(records.len(), (SAMPLE_WEEKS as usize) * 6);

        // Every generated week has both income and expense activity
        let summaries = weekly_summaries(&records, SAMPLE_WEEKS as usize, today);
        for week in &summaries {
            assert!(week.income.is_positive());
            assert!(week.expense.is_positive());
        }
    }

    #[test]
    fn test_sample_dates_stay_within_their_week() {
        let today = date(2025, 6, 12);
        for txn in sample_transactions(today) {
            let (start, end) = week_bounds(txn.date);
            assert!(txn.date >= start && txn.date <= end);
        }
    }
}

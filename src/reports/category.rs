//! Category spending summary
//!
//! Groups expense records by category and sums their amounts. Incomes are
//! excluded from this aggregate; they never count toward spending totals.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// One row of the category summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name as recorded
    pub category: String,
    /// Total expense amount in this category
    pub total: Money,
}

/// Summarize expense totals per category, descending by amount
///
/// `start`/`end` filter by date, inclusive on both ends; `top_n` truncates
/// the sorted result. Ties on amount order by category name so the output is
/// deterministic. Empty input (or no matching expenses) yields an empty vec.
pub fn category_summary(
    records: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    top_n: Option<usize>,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<String, Money> = HashMap::new();

    for txn in records {
        if !txn.is_expense() {
            continue;
        }
        if let Some(start) = start {
            if txn.date < start {
                continue;
            }
        }
        if let Some(end) = end {
            if txn.date > end {
                continue;
            }
        }
        *totals.entry(txn.category.clone()).or_insert_with(Money::zero) += txn.amount;
    }

    let mut summary: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    summary.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

    if let Some(n) = top_n {
        summary.truncate(n);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(d: NaiveDate, kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        Transaction::new(d, kind, Money::from_cents(cents), category, "")
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(date(2025, 6, 1), TransactionKind::Expense, 100_00, "Food"),
            txn(date(2025, 6, 2), TransactionKind::Expense, 50_00, "Food"),
            txn(date(2025, 6, 3), TransactionKind::Expense, 30_00, "Travel"),
            txn(date(2025, 6, 4), TransactionKind::Income, 1000_00, "Salary"),
        ]
    }

    #[test]
    fn test_sums_expenses_excludes_income() {
        let summary = category_summary(&sample(), None, None, None);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "Food");
        assert_eq!(summary[0].total, Money::from_cents(150_00));
        assert_eq!(summary[1].category, "Travel");
        assert_eq!(summary[1].total, Money::from_cents(30_00));
    }

    #[test]
    fn test_unrestricted_totals_match_expense_sum() {
        let records = sample();
        let expense_sum: Money = records
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        let summary_sum: Money = category_summary(&records, None, None, None)
            .iter()
            .map(|c| c.total)
            .sum();
        assert_eq!(summary_sum, expense_sum);
    }

    #[test]
    fn test_date_range_inclusive() {
        let summary = category_summary(
            &sample(),
            Some(date(2025, 6, 2)),
            Some(date(2025, 6, 3)),
            None,
        );
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].total, Money::from_cents(50_00));
    }

    #[test]
    fn test_top_n_truncates() {
        let summary = category_summary(&sample(), None, None, Some(1));
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].category, "Food");
    }

    #[test]
    fn test_ties_order_by_category_name() {
        let records = vec![
            txn(date(2025, 6, 1), TransactionKind::Expense, 10_00, "Zoo"),
            txn(date(2025, 6, 1), TransactionKind::Expense, 10_00, "Art"),
        ];
        let summary = category_summary(&records, None, None, None);
        assert_eq!(summary[0].category, "Art");
        assert_eq!(summary[1].category, "Zoo");
    }

    #[test]
    fn test_empty_records_yield_empty_summary() {
        assert!(category_summary(&[], None, None, None).is_empty());
    }
}

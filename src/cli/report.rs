//! CLI commands for summaries and charts

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{category_chart, weekly_chart};
use crate::error::TallyResult;
use crate::models::{parse_date, DATE_FORMAT};
use crate::reports::{category_summary, weekly_summaries};
use crate::storage::LedgerStore;

/// Print the category spending summary
///
/// `start`/`end` are raw date text (any supported format); `top` truncates
/// to the largest N categories.
pub fn handle_summary(
    store: &dyn LedgerStore,
    settings: &Settings,
    start: Option<&str>,
    end: Option<&str>,
    top: Option<usize>,
) -> TallyResult<()> {
    let records = store.load_all()?;
    let start = start.map(parse_date).transpose()?;
    let end = end.map(parse_date).transpose()?;
    let summary = category_summary(&records, start, end, top);

    match (start, end) {
        (Some(s), Some(e)) => println!(
            "Category spending from {} to {}:",
            s.format(DATE_FORMAT),
            e.format(DATE_FORMAT)
        ),
        _ => println!("Category spending (all-time):"),
    }

    if summary.is_empty() {
        println!("No expense data yet.");
        return Ok(());
    }
    for entry in &summary {
        println!(
            "{:20} {:>12}",
            entry.category,
            entry.total.format_with_symbol(&settings.currency_symbol)
        );
    }
    Ok(())
}

/// Print weekly summaries, most recent first
pub fn handle_weekly(store: &dyn LedgerStore, weeks: usize, today: NaiveDate) -> TallyResult<()> {
    let records = store.load_all()?;
    let summaries = weekly_summaries(&records, weeks, today);

    println!("Weekly summaries (most recent first):");
    for s in &summaries {
        println!(
            "{} → {} | income: {} | expense: {} | net: {}",
            s.week_start.format(DATE_FORMAT),
            s.week_end.format(DATE_FORMAT),
            s.income,
            s.expense,
            s.net
        );
    }
    Ok(())
}

/// Render the category spending bar chart
pub fn handle_chart_categories(
    store: &dyn LedgerStore,
    top: Option<usize>,
    start: Option<&str>,
    end: Option<&str>,
) -> TallyResult<()> {
    let records = store.load_all()?;
    let start = start.map(parse_date).transpose()?;
    let end = end.map(parse_date).transpose()?;
    let summary = category_summary(&records, start, end, top);
    print!("{}", category_chart(&summary));
    Ok(())
}

/// Render the weekly income vs expense chart
pub fn handle_chart_weekly(
    store: &dyn LedgerStore,
    weeks: usize,
    today: NaiveDate,
) -> TallyResult<()> {
    let records = store.load_all()?;
    let summaries = weekly_summaries(&records, weeks, today);
    print!("{}", weekly_chart(&summaries));
    Ok(())
}

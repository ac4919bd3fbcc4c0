//! Text chart renderers
//!
//! Terminal stand-ins for the two plots: a horizontal bar chart of category
//! spending and a per-week income/expense bar pair.

use crate::display::{format_bar, truncate};
use crate::models::DATE_FORMAT;
use crate::reports::{CategoryTotal, WeeklySummary};

const BAR_WIDTH: usize = 32;

/// Render category spending as horizontal bars, largest first
pub fn category_chart(summary: &[CategoryTotal]) -> String {
    if summary.is_empty() {
        return "No expense data to plot.\n".to_string();
    }

    // Summary is sorted descending, so the first entry sets the scale
    let max = summary[0].total.cents() as f64;

    let mut output = String::new();
    output.push_str(&format!("Top {} expense categories\n\n", summary.len()));
    for entry in summary {
        output.push_str(&format!(
            "{:16} {} {:>12}\n",
            truncate(&entry.category, 16),
            format_bar(entry.total.cents() as f64, max, BAR_WIDTH),
            entry.total.to_string()
        ));
    }
    output
}

/// Render weekly income vs expense bars, oldest week first
pub fn weekly_chart(summaries: &[WeeklySummary]) -> String {
    if summaries.is_empty() {
        return "No data to plot.\n".to_string();
    }

    let max = summaries
        .iter()
        .flat_map(|s| [s.income.cents(), s.expense.cents()])
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str(&format!(
        "Weekly income vs expense (last {} weeks)\n\n",
        summaries.len()
    ));

    // Summaries arrive most-recent first; plot oldest at the top
    for s in summaries.iter().rev() {
        output.push_str(&format!(
            "{}  income  {} {:>12}\n",
            s.week_start.format(DATE_FORMAT),
            format_bar(s.income.cents() as f64, max, BAR_WIDTH),
            s.income.to_string()
        ));
        output.push_str(&format!(
            "{}  expense {} {:>12}\n",
            " ".repeat(10),
            format_bar(s.expense.cents() as f64, max, BAR_WIDTH),
            s.expense.to_string()
        ));
    }
    output
}

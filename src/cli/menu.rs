//! Interactive menu loop
//!
//! The numbered-menu surface for terminal sessions. Each failed operation
//! prints its error and returns to the menu; only "0" (or end of input)
//! leaves the loop.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::audit::AuditLogger;
use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};
use crate::models::DATE_FORMAT;
use crate::storage::LedgerStore;

use super::{export, report, transaction};

/// Run the interactive menu until quit or end of input
pub fn run_menu<R: BufRead>(
    store: &mut dyn LedgerStore,
    paths: &TallyPaths,
    settings: &Settings,
    audit: &AuditLogger,
    mut input: R,
) -> TallyResult<()> {
    store.ensure_initialized()?;

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "> ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => menu_add(store, audit, &mut input),
            "2" => transaction::handle_list(store),
            "3" => report::handle_summary(store, settings, None, None, None),
            "4" => menu_summary_range(store, settings, &mut input),
            "5" => menu_weekly(store, settings, &mut input),
            "6" => menu_chart_categories(store, settings, &mut input),
            "7" => menu_chart_weekly(store, settings, &mut input),
            "8" => menu_export_weekly(store, settings, audit, paths, &mut input),
            "9" => export::handle_export_bullets(audit, &paths.bullets_file()),
            "0" => {
                println!("Bye.");
                break;
            }
            _ => {
                println!("Unknown option.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e}");
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("--- Personal Finance Ledger ---");
    println!("1) Add transaction");
    println!("2) View transactions");
    println!("3) Category summary (all-time)");
    println!("4) Category summary (date range)");
    println!("5) Weekly summary (last N weeks)");
    println!("6) Chart: category spending");
    println!("7) Chart: weekly income vs expense");
    println!("8) Export weekly summaries to CSV");
    println!("9) Export project bullets");
    println!("0) Quit");
}

/// Print a prompt and read one trimmed line; None at end of input
fn prompt<R: BufRead>(input: &mut R, message: &str) -> TallyResult<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a count, falling back to `default` on blank input
fn parse_count(text: &str, default: usize) -> TallyResult<usize> {
    if text.is_empty() {
        return Ok(default);
    }
    text.parse()
        .map_err(|_| TallyError::Validation(format!("not a number: {text}")))
}

fn menu_add<R: BufRead>(
    store: &mut dyn LedgerStore,
    audit: &AuditLogger,
    input: &mut R,
) -> TallyResult<()> {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
    let date = prompt(input, &format!("Date (YYYY-MM-DD) [default {today}]: "))?
        .unwrap_or_default();
    let date = if date.is_empty() { today } else { date };
    let kind = prompt(input, "Type (income/expense): ")?.unwrap_or_default();
    let amount = prompt(input, "Amount: ")?.unwrap_or_default();
    let category = prompt(input, "Category: ")?.unwrap_or_default();
    let description = prompt(input, "Description (optional): ")?.unwrap_or_default();

    transaction::handle_add(store, audit, &date, &kind, &amount, &category, &description)
}

fn menu_summary_range<R: BufRead>(
    store: &dyn LedgerStore,
    settings: &Settings,
    input: &mut R,
) -> TallyResult<()> {
    let start = prompt(input, "Start date (YYYY-MM-DD): ")?.unwrap_or_default();
    let end = prompt(input, "End date (YYYY-MM-DD): ")?.unwrap_or_default();
    report::handle_summary(store, settings, Some(&start), Some(&end), None)
}

fn menu_weekly<R: BufRead>(
    store: &dyn LedgerStore,
    settings: &Settings,
    input: &mut R,
) -> TallyResult<()> {
    let text = prompt(
        input,
        &format!("Number of weeks to show [default {}]: ", settings.default_weeks),
    )?
    .unwrap_or_default();
    let weeks = parse_count(&text, settings.default_weeks)?;
    report::handle_weekly(store, weeks, Local::now().date_naive())
}

fn menu_chart_categories<R: BufRead>(
    store: &dyn LedgerStore,
    settings: &Settings,
    input: &mut R,
) -> TallyResult<()> {
    let text = prompt(
        input,
        &format!(
            "Top N categories to show [default {}]: ",
            settings.top_categories
        ),
    )?
    .unwrap_or_default();
    let top = parse_count(&text, settings.top_categories)?;
    let start = prompt(input, "Start date (optional): ")?.unwrap_or_default();
    let end = prompt(input, "End date (optional): ")?.unwrap_or_default();

    let start = (!start.is_empty()).then_some(start);
    let end = (!end.is_empty()).then_some(end);
    report::handle_chart_categories(store, Some(top), start.as_deref(), end.as_deref())
}

fn menu_chart_weekly<R: BufRead>(
    store: &dyn LedgerStore,
    settings: &Settings,
    input: &mut R,
) -> TallyResult<()> {
    let text = prompt(
        input,
        &format!("Number of weeks to show [default {}]: ", settings.default_weeks),
    )?
    .unwrap_or_default();
    let weeks = parse_count(&text, settings.default_weeks)?;
    report::handle_chart_weekly(store, weeks, Local::now().date_naive())
}

fn menu_export_weekly<R: BufRead>(
    store: &dyn LedgerStore,
    settings: &Settings,
    audit: &AuditLogger,
    paths: &TallyPaths,
    input: &mut R,
) -> TallyResult<()> {
    let text = prompt(
        input,
        &format!("Number of weeks to export [default {}]: ", settings.export_weeks),
    )?
    .unwrap_or_default();
    let weeks = parse_count(&text, settings.export_weeks)?;
    export::handle_export_weekly(
        store,
        audit,
        weeks,
        Local::now().date_naive(),
        &paths.summary_file(),
    )
}

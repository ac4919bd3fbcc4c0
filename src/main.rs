use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use tally_cli::audit::AuditLogger;
use tally_cli::cli::{
    handle_add, handle_chart_categories, handle_chart_weekly, handle_export_bullets,
    handle_export_weekly, handle_generate, handle_list, handle_summary, handle_weekly,
    run_menu,
};
use tally_cli::config::{Settings, TallyPaths};
use tally_cli::models::DATE_FORMAT;
use tally_cli::storage::CsvLedger;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line personal finance ledger",
    long_about = "tally keeps a dated ledger of income and expenses in a flat \
                  CSV file, summarizes spending by category and by calendar \
                  week, and exports weekly summaries for external review. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction
    Add {
        /// Transaction type: income or expense (case-insensitive)
        kind: String,
        /// Amount, e.g. 45.50
        amount: String,
        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Category (defaults to "uncategorized")
        #[arg(short, long, default_value = "")]
        category: String,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List all transactions
    #[command(alias = "view")]
    List,

    /// Category spending summary
    Summary {
        /// Start date, inclusive
        #[arg(short, long)]
        start: Option<String>,
        /// End date, inclusive
        #[arg(short, long)]
        end: Option<String>,
        /// Show only the top N categories
        #[arg(long)]
        top: Option<usize>,
    },

    /// Weekly income/expense summary
    Weekly {
        /// Number of weeks, ending with the current week
        #[arg(short, long)]
        weeks: Option<usize>,
    },

    /// Render terminal charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export derived data to files
    #[command(subcommand)]
    Export(ExportCommands),

    /// Seed the ledger with deterministic sample data
    Generate,

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum ChartCommands {
    /// Bar chart of top expense categories
    Categories {
        /// Show only the top N categories
        #[arg(long)]
        top: Option<usize>,
        /// Start date, inclusive
        #[arg(short, long)]
        start: Option<String>,
        /// End date, inclusive
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Weekly income vs expense bars
    Weekly {
        /// Number of weeks, ending with the current week
        #[arg(short, long)]
        weeks: Option<usize>,
    },
}

#[derive(Subcommand)]
enum ExportCommands {
    /// Write weekly summaries to CSV
    Weekly {
        /// Number of weeks, ending with the current week
        #[arg(short, long)]
        weeks: Option<usize>,
        /// Destination file (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the project bullets text file
    Bullets {
        /// Destination file (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = CsvLedger::new(paths.transactions_file());
    let audit = AuditLogger::new(paths.audit_log());
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Add {
            kind,
            amount,
            date,
            category,
            description,
        }) => {
            let date =
                date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
            handle_add(
                &mut store,
                &audit,
                &date,
                &kind,
                &amount,
                &category,
                &description,
            )?;
        }
        Some(Commands::List) => handle_list(&store)?,
        Some(Commands::Summary { start, end, top }) => {
            handle_summary(&store, &settings, start.as_deref(), end.as_deref(), top)?;
        }
        Some(Commands::Weekly { weeks }) => {
            handle_weekly(&store, weeks.unwrap_or(settings.default_weeks), today)?;
        }
        Some(Commands::Chart(ChartCommands::Categories { top, start, end })) => {
            handle_chart_categories(
                &store,
                Some(top.unwrap_or(settings.top_categories)),
                start.as_deref(),
                end.as_deref(),
            )?;
        }
        Some(Commands::Chart(ChartCommands::Weekly { weeks })) => {
            handle_chart_weekly(&store, weeks.unwrap_or(settings.default_weeks), today)?;
        }
        Some(Commands::Export(ExportCommands::Weekly { weeks, output })) => {
            handle_export_weekly(
                &store,
                &audit,
                weeks.unwrap_or(settings.export_weeks),
                today,
                &output.unwrap_or_else(|| paths.summary_file()),
            )?;
        }
        Some(Commands::Export(ExportCommands::Bullets { output })) => {
            handle_export_bullets(&audit, &output.unwrap_or_else(|| paths.bullets_file()))?;
        }
        Some(Commands::Generate) => handle_generate(&mut store, &audit, today)?,
        Some(Commands::Config) => {
            println!("tally configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.transactions_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default weeks:    {}", settings.default_weeks);
            println!("  Export weeks:     {}", settings.export_weeks);
            println!("  Top categories:   {}", settings.top_categories);
        }
        None => run_menu(&mut store, &paths, &settings, &audit, io::stdin().lock())?,
    }

    Ok(())
}

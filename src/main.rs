use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::config::SpendlogPaths;
use spendlog::display::{format_amount, format_summary, format_total, separator};
use spendlog::services::Tracker;
use spendlog::storage::ExpenseStore;
use spendlog::tui;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense recorder",
    long_about = "spendlog records personal expenses (amount, category, date), \
                  keeps them in a JSON file, and shows total and per-category \
                  spending. Run without a subcommand for the interactive form."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive entry form
    #[command(alias = "ui")]
    Tui,

    /// Add a single expense
    Add {
        /// Amount spent
        amount: String,
        /// Category label (normalized to leading-capital form)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show total spending
    Total,

    /// Show spending by category, largest first
    Summary,

    /// Clear all recorded expenses and delete the backing file
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the data file location
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    paths.ensure_directories()?;
    let mut tracker = Tracker::open(ExpenseStore::new(paths.expenses_file()));

    match cli.command {
        None | Some(Commands::Tui) => {
            tui::run_tui(&mut tracker)?;
        }
        Some(Commands::Add {
            amount,
            category,
            date,
        }) => {
            let date = date.unwrap_or_else(spendlog::models::today_iso);
            let outcome = tracker.add_expense(&amount, &category, &date)?;
            println!("Added: {}", outcome.record);
            if let Err(e) = outcome.persisted {
                eprintln!("Warning: expense recorded but not saved: {}", e);
            }
        }
        Some(Commands::Total) => {
            println!("{}", format_total(tracker.total_spend()));
        }
        Some(Commands::Summary) => match format_summary(&tracker.spend_by_category()) {
            Some(lines) => {
                println!("Spending by category");
                println!("{}", separator(40));
                for line in lines {
                    println!("{}", line);
                }
                println!("{}", separator(40));
                println!("{}", format_total(tracker.total_spend()));
            }
            None => println!("No expenses yet."),
        },
        Some(Commands::Clear { yes }) => {
            if yes || confirm_clear()? {
                tracker.clear_all()?;
                println!("All expense data has been cleared.");
            } else {
                println!("Aborted.");
            }
        }
        Some(Commands::Config) => {
            println!("spendlog configuration");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!(
                "Recorded:       {} expense(s), {} total",
                tracker.records().len(),
                format_amount(tracker.total_spend())
            );
        }
    }

    Ok(())
}

/// Ask for confirmation on stdin before wiping all data
fn confirm_clear() -> Result<bool> {
    print!("Are you sure you want to clear all expenses? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

pub mod budget;
pub mod demo;
pub mod export;
pub mod init;
pub mod report;
pub mod status;
pub mod transactions;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Personal budget tracking CLI with spending-reduction suggestions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up tally: choose a data directory and create the database.
    Init {
        /// Path for tally data (default: ~/Documents/tally)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a transaction.
    Add {
        /// Transaction kind: income or expense
        #[arg(long)]
        kind: String,
        /// Category label, e.g. 'rent'
        #[arg(long)]
        category: String,
        /// Non-negative amount
        #[arg(long)]
        amount: f64,
        /// Free-form note
        #[arg(long)]
        description: Option<String>,
        /// Date: YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// List all transactions.
    List,
    /// Replace every field of an existing transaction.
    Edit {
        /// Transaction id (shown in `tally list`)
        id: i64,
        /// Transaction kind: income or expense
        #[arg(long)]
        kind: String,
        /// Category label
        #[arg(long)]
        category: String,
        /// Non-negative amount
        #[arg(long)]
        amount: f64,
        /// Free-form note
        #[arg(long)]
        description: Option<String>,
        /// Date: YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Delete a transaction by id.
    Delete {
        /// Transaction id (shown in `tally list`)
        id: i64,
    },
    /// Manage monthly budgets.
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Generate reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Compare a month's spending against its budget and suggest reductions.
    Suggest {
        /// Month: 1-12
        #[arg(long)]
        month: String,
        /// Four-digit year
        #[arg(long)]
        year: String,
    },
    /// Export all transactions to CSV.
    Export {
        /// Output file path
        #[arg(long, default_value = "transactions.csv")]
        output: String,
    },
    /// Load sample transactions and budgets to explore tally.
    Demo,
    /// Show current database and record counts.
    Status,
}

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a month. A new row supersedes earlier ones.
    Set {
        /// Month: 1-12
        #[arg(long)]
        month: String,
        /// Four-digit year
        #[arg(long)]
        year: String,
        /// Non-negative budget amount
        #[arg(long)]
        amount: f64,
    },
    /// List all budget rows, oldest first.
    List,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overall income, expenses, and balance.
    Totals,
    /// Expenditure and category breakdown for one month.
    Month {
        /// Month: 1-12
        #[arg(long)]
        month: String,
        /// Four-digit year
        #[arg(long)]
        year: String,
    },
}

use crate::core::engine::StatusFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPayMinder
/// CLI application to track recurring bills and payment reminders with SQLite
#[derive(Parser)]
#[command(
    name = "rpayminder",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple payment reminder CLI: track bills, due dates and payment history using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create an account (local auth backend)
    Signup {
        /// Email address identifying the account
        email: String,
    },

    /// Sign in to an existing account
    Login {
        /// Email address of the account
        email: String,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the currently signed-in owner
    Whoami,

    /// Add a payment reminder
    Add {
        /// Title of the bill (e.g. "Rent")
        title: String,

        /// Amount due
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long = "due", value_name = "DATE")]
        due: String,

        /// Optional free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit an existing payment
    Edit {
        /// Payment id (as shown by list)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        #[arg(long = "due", value_name = "DATE")]
        due: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Remove the notes field
        #[arg(long = "clear-notes", conflicts_with = "notes")]
        clear_notes: bool,
    },

    /// Mark a payment as paid
    Paid {
        /// Payment id
        id: String,
    },

    /// Delete a payment
    Del {
        /// Payment id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List payments with dashboard stats
    List {
        /// Filter by classification
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,

        /// Case-insensitive search over title and notes
        #[arg(long)]
        search: Option<String>,

        /// Show only the stats block
        #[arg(long = "stats", help = "Show only dashboard statistics")]
        stats_only: bool,
    },

    /// Show payment reminders (overdue + due this week)
    Due,

    /// Show paid payment history, optionally for one month
    History {
        /// Restrict to a month (YYYY-MM)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        /// List the months that have payment history
        #[arg(long = "months", help = "List available months")]
        list_months: bool,

        /// Export the selected history as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<String>,

        /// Export a summary report as PDF
        #[arg(long, value_name = "FILE")]
        pdf: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate a PDF receipt for a payment
    Receipt {
        /// Payment id
        id: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export payment data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by due date: year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,

        #[arg(long)]
        search: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rReadlogger
/// CLI application to track daily reading with SQLite
#[derive(Parser)]
#[command(
    name = "rreadlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A gamified reading-tracker CLI: log pages, follow book progress, keep your streak alive",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a book edition or list the registered ones
    Book {
        /// Edition identifier (ISBN)
        isbn: Option<String>,

        #[arg(long, help = "Book title")]
        title: Option<String>,

        #[arg(long, help = "Book author")]
        author: Option<String>,

        #[arg(long, help = "Page count of this edition")]
        pages: Option<i64>,

        #[arg(long, help = "List registered editions")]
        list: bool,
    },

    /// Log pages read for an edition
    Add {
        /// Edition identifier (ISBN)
        isbn: String,

        /// Pages read
        pages: i64,

        #[arg(long, help = "Reading date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Free-text note attached to the log entry")]
        note: Option<String>,
    },

    /// Mark an edition as started
    Start {
        /// Edition identifier (ISBN)
        isbn: String,

        #[arg(long, help = "Event date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Free-text note attached to the event")]
        note: Option<String>,
    },

    /// Mark an edition as dropped
    Drop {
        /// Edition identifier (ISBN)
        isbn: String,

        #[arg(long, help = "Event date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Free-text note attached to the event")]
        note: Option<String>,
    },

    /// Mark an edition as finished (logs the remaining pages)
    Finish {
        /// Edition identifier (ISBN)
        isbn: String,

        #[arg(long, help = "Finish date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Free-text note attached to the event")]
        note: Option<String>,
    },

    /// List read logs by period
    List {
        /// Period to show.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year  (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        /// - start:end ranges in the same shapes (e.g. "2025-06:2025-08")
        ///
        /// If omitted, the current month is shown.
        #[arg(long, value_name = "PERIOD", help = "Filter by year/month/day or a range")]
        period: Option<String>,

        /// Show only today's logs
        #[arg(long, help = "Show only today's read logs")]
        now: bool,
    },

    /// Show per-book progress (reading / finished / dropped)
    Shelf,

    /// Show the dashboard: active book, streak and totals
    Dashboard,

    /// Show badges and progress towards them
    Badges,

    /// Delete read logs by date (all of them, or one by id)
    Del {
        /// Date of the logs to delete (YYYY-MM-DD)
        date: String,

        #[arg(long = "id", help = "Delete a single log row by id")]
        id: Option<i64>,
    },

    /// Export read logs or the derived shelf
    Export {
        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file (absolute path)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY / YYYY-MM / YYYY-MM-DD
        /// - start:end in the same shapes
        /// - all → entire archive
        ///
        /// If omitted, all records are exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Export the derived shelf instead of raw read logs
        #[arg(long)]
        shelf: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Backup the database file
    Backup {
        /// Destination file
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,
    },
}

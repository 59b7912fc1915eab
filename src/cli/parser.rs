use clap::{Parser, Subcommand};

/// Command-line interface definition for medjournal
/// CLI journal for medication intake and well-being tracking
#[derive(Parser)]
#[command(
    name = "medjournal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log medications and well-being, then explore frequency, trend and correlation statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the store directory (useful for tests or a custom journal)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty journal store
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Log a new journal entry
    Add {
        /// Medications/vitamins taken, comma separated
        #[arg(long = "meds", help = "Comma-separated labels, e.g. \"Vitamin D, Aspirin\"")]
        meds: String,

        /// Well-being score (1 = poor, 10 = excellent)
        #[arg(long = "score", help = "Well-being score between 1 and 10")]
        score: i64,

        /// Free-text notes (side effects, observations, ...)
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Show journal entries, newest first
    List {
        #[arg(long = "limit", help = "Show at most N entries")]
        limit: Option<usize>,

        #[arg(long = "all", help = "Show every entry, ignoring the limit")]
        all: bool,

        #[arg(long = "json", help = "Emit the entries as JSON")]
        json: bool,
    },

    /// Edit an existing entry by id
    Edit {
        /// Entry id as shown by `list`
        id: String,

        #[arg(long = "meds", help = "Replace the medication list (comma separated)")]
        meds: Option<String>,

        #[arg(long = "score", help = "Replace the well-being score (1-10)")]
        score: Option<i64>,

        #[arg(long = "notes", help = "Replace the notes (empty string clears them)")]
        notes: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id as shown by `list`
        id: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Delete the whole journal
    Clear {
        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Summary statistics: totals, frequency table, score distribution
    Stats {
        #[arg(long = "json", help = "Emit the statistics as JSON")]
        json: bool,
    },

    /// Daily well-being averages over a lookback window
    Trend {
        #[arg(long = "days", help = "Lookback window in days (default from config)")]
        days: Option<i64>,

        #[arg(long = "json", help = "Emit the trend as JSON")]
        json: bool,
    },

    /// Compare average well-being with and without a medication
    Correlate {
        /// Medication label; omit to rank all medications
        medication: Option<String>,

        #[arg(long = "json", help = "Emit the correlation as JSON")]
        json: bool,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daynotes", bin_name = "daynotes", version)]
#[command(about = "Month-sheet calendar with a note for any day", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (defaults to the platform data dir)
    #[arg(long, global = true, env = "DAYNOTES_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the month sheet with each day's note (defaults to this month)
    #[command(alias = "m")]
    Month {
        /// Month number, 1-12
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the current year)
        year: Option<i32>,
    },

    /// Write the note for a day (DD/MM/YYYY or "today"); empty text clears it
    #[command(alias = "s")]
    Set {
        /// Day to annotate
        date: String,

        /// Note text; multiple words are joined with spaces
        #[arg(num_args = 0.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Print the note for a day
    #[command(alias = "g")]
    Get {
        /// Day to look up (DD/MM/YYYY or "today")
        date: String,
    },

    /// Remove the notes for one or more days
    #[command(alias = "rm")]
    Clear {
        /// Days to clear (DD/MM/YYYY or "today")
        #[arg(required = true, num_args = 1..)]
        dates: Vec<String>,
    },

    /// List all saved notes grouped by month
    #[command(alias = "v")]
    View,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

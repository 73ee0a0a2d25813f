use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "File-backed inventory tally for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file to load from and save to (default: inventory.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add stock for an item
    #[command(alias = "a")]
    Add {
        /// Item name (trimmed and lowercased for the ledger key)
        item: String,

        /// Quantity to add (must be positive)
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Remove stock for an item
    #[command(alias = "rm")]
    Remove {
        /// Item name
        item: String,

        /// Quantity to remove (must be positive, at most the amount on hand)
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Print the quantity on hand for an item
    #[command(alias = "g")]
    Get {
        /// Item name
        item: String,
    },

    /// List items below the low-stock threshold
    Low {
        /// Threshold (default from config, falling back to 5)
        threshold: Option<u64>,
    },

    /// Print the full items report
    #[command(alias = "ls")]
    Report,

    /// Get or set configuration
    Config {
        /// Configuration key (file, threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the built-in demonstration sequence
    Demo,
}

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use matchlens::{DEFAULT_ACTUAL_KEY, DEFAULT_EXPECTED_KEY};

/// Matchlens: audit tool for automated title-matching results
#[derive(Parser)]
#[command(name = "matchlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare expected and actual titles in a mappings file and print the results
    Check {
        /// Path or URL of the mappings file (JSON sequence of records)
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Field holding the expected title
        #[arg(short, long, default_value = DEFAULT_EXPECTED_KEY)]
        expected_key: String,

        /// Field holding the title the matcher produced
        #[arg(short, long, default_value = DEFAULT_ACTUAL_KEY)]
        actual_key: String,

        /// Output rows and summary as JSON
        #[arg(long)]
        json: bool,

        /// Only print rows whose titles do not match
        #[arg(long)]
        mismatches_only: bool,
    },

    /// Open the web UI for interactive match review
    Review {
        /// Path or URL of a mappings file to preload
        #[arg(value_name = "SOURCE")]
        source: Option<String>,

        /// Port for the web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open the browser
        #[arg(long)]
        no_open: bool,
    },
}

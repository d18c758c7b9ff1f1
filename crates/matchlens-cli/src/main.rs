//! Matchlens CLI - title-match audit tool.

mod cli;
mod commands;
mod server;
mod source;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            source,
            expected_key,
            actual_key,
            json,
            mismatches_only,
        } => commands::check::run(
            source,
            expected_key,
            actual_key,
            json,
            mismatches_only,
            cli.verbose,
        ),

        Commands::Review {
            source,
            port,
            no_open,
        } => commands::review::run(source, port, no_open, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

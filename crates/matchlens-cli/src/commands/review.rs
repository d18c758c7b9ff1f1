//! Review command - open web UI for interactive match review.

use colored::Colorize;
use matchlens::Session;

use crate::server::{app, state::AppState};
use crate::source::load_source;

pub fn run(
    source: Option<String>,
    port: u16,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();

    // Preload the requested source; a failure becomes session state the
    // UI shows, not a startup abort.
    if let Some(source) = &source {
        let token = session.begin_load();
        let outcome = load_source(source).map(|(records, metadata)| {
            if verbose {
                println!(
                    "Loaded {} records from {} ({})",
                    metadata.record_count, metadata.source, metadata.hash
                );
            }
            records
        });
        session.complete(token, outcome);

        if let Some(reason) = session.error() {
            println!("{} {}", "Warning:".yellow(), reason);
        }
    }

    let state = AppState::new(session);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting review server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    if let Some(source) = &source {
        println!("  Source: {}", source);
        println!();
    }
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Open browser if requested
    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    // Run the server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}

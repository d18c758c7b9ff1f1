//! Check command - one-shot comparison of a mappings file.

use colored::Colorize;
use matchlens::{compute_rows, summarize};
use serde_json::json;

use crate::source::load_source;

pub fn run(
    source: String,
    expected_key: String,
    actual_key: String,
    json_output: bool,
    mismatches_only: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (records, metadata) = load_source(&source)?;

    if verbose {
        println!(
            "Loaded {} records from {} ({} bytes, {})",
            metadata.record_count, metadata.source, metadata.size_bytes, metadata.hash
        );
    }

    let rows = compute_rows(&records, &expected_key, &actual_key);
    let summary = summarize(&rows);

    if json_output {
        let output = json!({
            "source": metadata,
            "rows": rows,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (index, row) in rows.iter().enumerate() {
        if mismatches_only && row.is_exact {
            continue;
        }

        let marker = if row.is_exact {
            "match".green()
        } else {
            "MISMATCH".red().bold()
        };
        println!(
            "{:>4}  {:<10} {}  |  {}",
            index + 1,
            marker,
            row.expected_title,
            row.actual_title
        );
        if !row.is_exact {
            println!(
                "      {:<10} {}  |  {}",
                "canonical".dimmed(),
                row.expected_norm.dimmed(),
                row.actual_norm.dimmed()
            );
        }
    }

    println!();
    println!(
        "{} total, {} matched, {} mismatched",
        summary.total.to_string().bold(),
        summary.matched.to_string().green(),
        summary.mismatched.to_string().red()
    );

    Ok(())
}

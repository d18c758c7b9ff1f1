//! Matchlens: audit tool for automated title-matching results.
//!
//! Matchlens loads a sequence of record mappings, canonicalizes an
//! "expected" and an "actual" title field from each record, and reports
//! per-row and aggregate match/mismatch results for human review.
//!
//! # Core Principles
//!
//! - **Total computation**: normalization, extraction, and comparison never
//!   fail, whatever shape the loaded records take
//! - **Derived, never stale**: rows and summaries are pure projections,
//!   recomputed in full from the current dataset and key selection
//! - **Last load wins**: a request epoch guards against a superseded load
//!   overwriting a newer one
//!
//! # Example
//!
//! ```no_run
//! use matchlens::{compute_rows, load_file, summarize};
//!
//! let (records, _meta) = load_file("mappings.json").unwrap();
//! let rows = compute_rows(&records, "title", "matched_csv_title");
//! let summary = summarize(&rows);
//!
//! println!("{} of {} titles match", summary.matched, summary.total);
//! ```

pub mod compare;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod session;

pub use compare::{ComparisonRow, Summary, compute_rows, summarize};
pub use error::{MatchlensError, Result};
pub use loader::{SourceMetadata, fetch_url, load_file, parse_records};
pub use normalize::normalize;
pub use record::{Record, detect_keys, extract};
pub use session::{DEFAULT_ACTUAL_KEY, DEFAULT_EXPECTED_KEY, DEFAULT_SOURCE, LoadState, Session};

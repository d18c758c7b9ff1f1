//! Audit session state.
//!
//! A `Session` owns the loaded dataset and the current field selection,
//! and hands out derived views (selectable keys, comparison rows, summary)
//! that are recomputed in full on every call. All mutation happens on one
//! logical control thread; loads that complete out of order are fenced by
//! a monotonically increasing request epoch.

use crate::compare::{ComparisonRow, Summary, compute_rows, summarize};
use crate::error::Result;
use crate::record::{Record, detect_keys};

/// Default field holding the expected title.
pub const DEFAULT_EXPECTED_KEY: &str = "title";

/// Default field holding the title the matcher produced.
pub const DEFAULT_ACTUAL_KEY: &str = "matched_csv_title";

/// Default dataset source when none is configured.
pub const DEFAULT_SOURCE: &str = "/mappings.json";

/// Lifecycle of the current load attempt. Exactly one state is live at a
/// time; a new load supersedes whatever came before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The dataset in the session is current.
    Loaded,
    /// The last load failed; the dataset is empty.
    Failed(String),
}

/// State machine for one audit session.
#[derive(Debug)]
pub struct Session {
    records: Vec<Record>,
    expected_key: String,
    actual_key: String,
    state: LoadState,
    epoch: u64,
}

impl Session {
    /// Create an idle session with the default key selection.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            expected_key: DEFAULT_EXPECTED_KEY.to_string(),
            actual_key: DEFAULT_ACTUAL_KEY.to_string(),
            state: LoadState::Idle,
            epoch: 0,
        }
    }

    /// Begin a load attempt, superseding any load still in flight.
    ///
    /// Returns the epoch token the caller must present to `complete`.
    /// The previous dataset stays visible until the outcome arrives.
    pub fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.state = LoadState::Loading;
        self.epoch
    }

    /// Apply a load outcome, unless a newer load has started since.
    ///
    /// Returns false (and changes nothing) for a stale token. On failure
    /// the dataset is cleared, so stale rows are never shown next to an
    /// error message.
    pub fn complete(&mut self, token: u64, outcome: Result<Vec<Record>>) -> bool {
        if token != self.epoch {
            return false;
        }

        match outcome {
            Ok(records) => {
                self.records = records;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                self.records.clear();
                self.state = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Change the expected-side field. No reload; derived views pick the
    /// new selection up on their next computation.
    pub fn set_expected_key(&mut self, key: impl Into<String>) {
        self.expected_key = key.into();
    }

    /// Change the actual-side field.
    pub fn set_actual_key(&mut self, key: impl Into<String>) {
        self.actual_key = key.into();
    }

    pub fn expected_key(&self) -> &str {
        &self.expected_key
    }

    pub fn actual_key(&self) -> &str {
        &self.actual_key
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Error message of the last failed load, if that is the live state.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Selectable field names, from the first record.
    pub fn keys(&self) -> Vec<String> {
        detect_keys(&self.records)
    }

    /// Comparison rows for the current dataset and selection.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        compute_rows(&self.records, &self.expected_key, &self.actual_key)
    }

    /// Aggregate counts for the current dataset and selection.
    pub fn summary(&self) -> Summary {
        summarize(&self.rows())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchlensError;
    use crate::loader::parse_records;

    fn sample() -> Vec<Record> {
        parse_records(
            r#"[
                {"title": "Ocean View", "matched_csv_title": "ocean view"},
                {"title": "Studio A", "matched_csv_title": "Studio B"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.expected_key(), "title");
        assert_eq!(session.actual_key(), "matched_csv_title");
        assert_eq!(*session.state(), LoadState::Idle);
        assert!(session.rows().is_empty());
    }

    #[test]
    fn test_load_and_summarize() {
        let mut session = Session::new();
        let token = session.begin_load();
        assert!(session.is_loading());
        assert!(session.complete(token, Ok(sample())));

        assert_eq!(*session.state(), LoadState::Loaded);
        assert_eq!(session.keys(), vec!["title", "matched_csv_title"]);
        let summary = session.summary();
        assert_eq!((summary.total, summary.matched, summary.mismatched), (2, 1, 1));
    }

    #[test]
    fn test_failure_clears_dataset() {
        let mut session = Session::new();
        let token = session.begin_load();
        session.complete(token, Ok(sample()));

        let token = session.begin_load();
        assert!(session.complete(token, Err(MatchlensError::Shape)));

        assert_eq!(session.error(), Some("expected a sequence"));
        assert!(session.records().is_empty());
        assert_eq!(session.summary().total, 0);
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut session = Session::new();
        let first = session.begin_load();
        let second = session.begin_load();

        // The superseded load finishes late; its outcome must not apply.
        assert!(!session.complete(first, Err(MatchlensError::Shape)));
        assert!(session.is_loading());

        assert!(session.complete(second, Ok(sample())));
        assert_eq!(*session.state(), LoadState::Loaded);
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn test_key_change_recomputes_without_reload() {
        let mut session = Session::new();
        let token = session.begin_load();
        session.complete(token, Ok(sample()));

        session.set_actual_key("title");
        let summary = session.summary();
        // Comparing a field against itself matches every row.
        assert_eq!((summary.total, summary.matched), (2, 2));
        assert_eq!(*session.state(), LoadState::Loaded);
    }
}

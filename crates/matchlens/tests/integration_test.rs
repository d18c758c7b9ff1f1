//! Integration tests for Matchlens.

use std::io::Write;
use tempfile::NamedTempFile;

use matchlens::{
    LoadState, MatchlensError, Session, compute_rows, load_file, parse_records, summarize,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_basic_mappings_file() {
    let content = r#"[
        {"title": "Ocean View", "matched_csv_title": "ocean view"},
        {"title": "Studio A", "matched_csv_title": "Studio B"},
        {"title": "Café — 2 Bedrooms", "matched_csv_title": "cafe 2 bedrooms"}
    ]"#;
    let file = create_test_file(content);

    let (records, meta) = load_file(file.path()).expect("Load failed");
    assert_eq!(records.len(), 3);
    assert_eq!(meta.record_count, 3);
    assert!(meta.hash.starts_with("sha256:"));
}

#[test]
fn test_load_non_sequence_fails_with_shape_reason() {
    let file = create_test_file(r#"{"title": "not a sequence"}"#);

    let err = load_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "expected a sequence");
}

#[test]
fn test_load_malformed_json_fails_with_parse_reason() {
    let file = create_test_file("[{oops");

    assert!(matches!(
        load_file(file.path()),
        Err(MatchlensError::Parse(_))
    ));
}

// =============================================================================
// End-to-end: load, compare, summarize
// =============================================================================

#[test]
fn test_full_audit_pipeline() {
    let content = r#"[
        {"title": "  Hello,  World!! ", "matched_csv_title": "hello world"},
        {"title": "Apt. 4B", "matched_csv_title": "apt 4c"},
        {"title": 42, "matched_csv_title": "42"},
        {"title": null, "matched_csv_title": ""}
    ]"#;
    let file = create_test_file(content);

    let (records, _) = load_file(file.path()).unwrap();
    let rows = compute_rows(&records, "title", "matched_csv_title");

    assert!(rows[0].is_exact, "punctuation/case differences normalize away");
    assert!(!rows[1].is_exact);
    assert!(rows[2].is_exact, "numbers coerce to their text form");
    assert!(rows[3].is_exact, "null and empty both normalize to empty");

    let summary = summarize(&rows);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.mismatched, 1);
}

#[test]
fn test_session_drives_full_lifecycle() {
    let file = create_test_file(r#"[{"title": "A", "matched_csv_title": "a"}]"#);

    let mut session = Session::new();
    let token = session.begin_load();
    let outcome = load_file(file.path()).map(|(records, _)| records);
    assert!(session.complete(token, outcome));

    assert_eq!(*session.state(), LoadState::Loaded);
    assert_eq!(session.summary().matched, 1);

    // A failed reload wipes the dataset along with the rows.
    let token = session.begin_load();
    session.complete(token, parse_records("not even json"));
    assert!(session.error().is_some());
    assert_eq!(session.summary().total, 0);
}

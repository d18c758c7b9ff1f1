//! Row comparison and aggregate counts.

use serde::Serialize;

use crate::normalize::normalize;
use crate::record::{Record, extract};

/// One record's comparison result: the raw titles, their canonical forms,
/// and whether the canonical forms match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Title from the expected-side field, as loaded.
    pub expected_title: String,
    /// Title from the actual-side field, as loaded.
    pub actual_title: String,
    /// Canonical form of the expected title.
    pub expected_norm: String,
    /// Canonical form of the actual title.
    pub actual_norm: String,
    /// Whether the canonical forms are exactly equal.
    pub is_exact: bool,
}

/// Aggregate match counts over a set of comparison rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
}

/// Compare every record's expected/actual fields, in dataset order.
///
/// Pure and total: one row per record, extraction and normalization never
/// fail. Rows are always rebuilt in full; callers re-invoke this whenever
/// the dataset or either key changes.
pub fn compute_rows(records: &[Record], expected_key: &str, actual_key: &str) -> Vec<ComparisonRow> {
    records
        .iter()
        .map(|record| {
            let expected_title = extract(record, expected_key);
            let actual_title = extract(record, actual_key);
            let expected_norm = normalize(&expected_title);
            let actual_norm = normalize(&actual_title);
            let is_exact = expected_norm == actual_norm;
            ComparisonRow {
                expected_title,
                actual_title,
                expected_norm,
                actual_norm,
                is_exact,
            }
        })
        .collect()
}

/// Count matches in a single pass. `matched + mismatched == total` always.
pub fn summarize(rows: &[ComparisonRow]) -> Summary {
    let matched = rows.iter().filter(|row| row.is_exact).count();
    Summary {
        total: rows.len(),
        matched,
        mismatched: rows.len() - matched,
    }
}

//! Loosely-typed records and field extraction.

use indexmap::IndexMap;
use serde_json::Value;

/// One entry in a loaded dataset: an open-ended mapping of field names to
/// JSON values. Field order follows the source document, so the first
/// record's keys can drive field selection in the order the author wrote
/// them.
pub type Record = IndexMap<String, Value>;

/// Extract a field from a record as text.
///
/// Missing keys and nulls yield the empty string. Strings pass through
/// unchanged; numbers and booleans render in their canonical JSON text
/// form. Nested arrays/objects are coerced to their JSON serialization.
/// Total: never fails, whatever the record contains.
pub fn extract(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(value) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Propose selectable field names for a dataset.
///
/// Returns the first record's keys in their enumeration order; an empty
/// dataset yields an empty list. Keys that only appear on later records
/// are deliberately not offered (known limitation, kept for predictable
/// behavior).
pub fn detect_keys(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}

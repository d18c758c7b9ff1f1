//! Dataset loading from files and remote sources.
//!
//! Both entry points converge on the same surface: a parsed record
//! sequence plus provenance metadata, or a single typed failure. Parsing
//! is synchronous and whole-document; there is no streaming or partial
//! delivery.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{MatchlensError, Result};
use crate::record::Record;

/// Timeout for remote dataset retrieval.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Provenance for a loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// File path or URL the dataset came from.
    pub source: String,
    /// SHA-256 hash of the raw content.
    pub hash: String,
    /// Raw content size in bytes.
    pub size_bytes: u64,
    /// Number of records in the parsed sequence.
    pub record_count: usize,
    /// When the load completed.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    fn new(source: impl Into<String>, content: &str, record_count: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());

        Self {
            source: source.into(),
            hash: format!("sha256:{:x}", hasher.finalize()),
            size_bytes: content.len() as u64,
            record_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Parse text content as a sequence of records.
///
/// The top-level JSON value must be an array; anything else is a
/// `Shape` error ("expected a sequence"). Array elements that are not
/// objects degrade to empty records rather than failing, matching the
/// no-schema-validation contract.
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| MatchlensError::Parse(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(MatchlensError::Shape);
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => map.into_iter().collect(),
            _ => Record::new(),
        })
        .collect())
}

/// Load a dataset from a local file.
pub fn load_file(path: impl AsRef<Path>) -> Result<(Vec<Record>, SourceMetadata)> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| MatchlensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records = parse_records(&content)?;
    let metadata = SourceMetadata::new(path.to_string_lossy(), &content, records.len());
    Ok((records, metadata))
}

/// Fetch a dataset from a remote URL.
///
/// A non-2xx status yields `Transport` with the numeric status; the body
/// is parsed exactly like file content.
pub fn fetch_url(url: &str) -> Result<(Vec<Record>, SourceMetadata)> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| MatchlensError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(MatchlensError::Transport {
            status: status.as_u16(),
        });
    }

    let content = response.text()?;
    let records = parse_records(&content)?;
    let metadata = SourceMetadata::new(url, &content, records.len());
    Ok((records, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        let records = parse_records(r#"[{"title": "A"}, {"title": "B"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "A");
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let records = parse_records(r#"[{"zebra": 1, "apple": 2, "mango": 3}]"#).unwrap();
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_object_is_shape_error() {
        let err = parse_records(r#"{"title": "A"}"#).unwrap_err();
        assert!(matches!(err, MatchlensError::Shape));
        assert_eq!(err.to_string(), "expected a sequence");
    }

    #[test]
    fn test_parse_scalar_is_shape_error() {
        assert!(matches!(parse_records("42"), Err(MatchlensError::Shape)));
    }

    #[test]
    fn test_parse_malformed_is_parse_error() {
        assert!(matches!(
            parse_records("[{not json"),
            Err(MatchlensError::Parse(_))
        ));
    }

    #[test]
    fn test_non_object_elements_degrade_to_empty() {
        let records = parse_records(r#"[{"title": "A"}, 7, "x"]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[1].is_empty());
        assert!(records[2].is_empty());
    }

    #[test]
    fn test_load_file_metadata() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"title": "A"}]"#).unwrap();

        let (records, meta) = load_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(meta.record_count, 1);
        assert!(meta.hash.starts_with("sha256:"));
        assert_eq!(meta.size_bytes, 16);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_file("/nonexistent/mappings.json"),
            Err(MatchlensError::Io { .. })
        ));
    }
}

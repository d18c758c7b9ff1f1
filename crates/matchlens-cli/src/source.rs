//! Source dispatch: remote URL vs local file path.

use matchlens::{Record, SourceMetadata, fetch_url, load_file};

/// Whether a source identifier names a remote URL.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load a dataset from a URL or a local path.
pub fn load_source(source: &str) -> matchlens::Result<(Vec<Record>, SourceMetadata)> {
    if is_url(source) {
        fetch_url(source)
    } else {
        load_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("http://localhost:3141/mappings.json"));
        assert!(is_url("https://example.com/data.json"));
        assert!(!is_url("mappings.json"));
        assert!(!is_url("/mappings.json"));
        assert!(!is_url("ftp://example.com/data.json"));
    }
}

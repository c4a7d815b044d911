//! Pattern resource loading
//!
//! Reads the ordered (pattern, response) pairs from a JSON file. File order
//! determines match priority; duplicates are allowed and the earlier entry
//! shadows later ones.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// A stored (trigger substring, canned response) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Substring that triggers this entry when found in a query
    pub pattern: String,
    /// Canned response returned on a match
    pub response: String,
}

/// Errors that can occur while loading the pattern resource
#[derive(Error, Debug)]
pub enum PatternStoreError {
    /// The pattern file does not exist
    #[error("Patterns file not found: {0}")]
    NotFound(String),

    /// The pattern file could not be read
    #[error("Failed to read patterns file: {0}")]
    Io(String),

    /// The pattern file exists but is not a valid JSON array of entries
    #[error("Error decoding the patterns file: {0}")]
    Malformed(String),
}

/// Load the pattern entries from a JSON file
///
/// The resource is a JSON array of objects with string fields `pattern` and
/// `response`. Entries are returned in file order. Failures are typed rather
/// than raised as sentinel entries; callers degrade to an empty set so that
/// every query receives the fallback response.
pub fn load_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<PatternEntry>, PatternStoreError> {
    let path = path.as_ref();

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PatternStoreError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(PatternStoreError::Io(e.to_string())),
    };

    serde_json::from_str(&json).map_err(|e| PatternStoreError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_patterns_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_patterns() {
        let file = write_patterns_file(
            r#"[
                {"pattern": "divorce", "response": "See Family Law Act §12"},
                {"pattern": "tax", "response": "Consult the Income Tax Act"}
            ]"#,
        );

        let patterns = load_patterns(file.path()).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].pattern, "divorce");
        assert_eq!(patterns[0].response, "See Family Law Act §12");
        assert_eq!(patterns[1].pattern, "tax");
    }

    #[test]
    fn test_load_preserves_file_order_and_duplicates() {
        let file = write_patterns_file(
            r#"[
                {"pattern": "tax", "response": "A"},
                {"pattern": "tax", "response": "B"}
            ]"#,
        );

        let patterns = load_patterns(file.path()).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].response, "A");
        assert_eq!(patterns[1].response, "B");
    }

    #[test]
    fn test_load_missing_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        drop(file);

        let result = load_patterns(&path);
        match result.unwrap_err() {
            PatternStoreError::NotFound(_) => {}
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_patterns_file("{ not valid json ]");

        let result = load_patterns(file.path());
        match result.unwrap_err() {
            PatternStoreError::Malformed(_) => {}
            other => panic!("Expected Malformed error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_wrong_shape_is_malformed() {
        // Valid JSON, but an object instead of an array of entries
        let file = write_patterns_file(r#"{"error": "Patterns file not found."}"#);

        let result = load_patterns(file.path());
        assert!(matches!(result, Err(PatternStoreError::Malformed(_))));
    }
}

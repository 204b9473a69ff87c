//! Error types for row ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading rows.
///
/// Every variant aborts the whole read; no partial rows are returned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from a stream (e.g. piped stdin).
    #[error("failed to read input stream: {0}")]
    StreamRead(#[source] std::io::Error),

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Header or row field names do not exactly match the schema.
    ///
    /// `line` is the 1-based input line that failed (1 is the header).
    #[error("Invalid schema")]
    InvalidSchema {
        line: u64,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl IngestError {
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::InvalidSchema { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = IngestError::InvalidSchema {
            line: 1,
            expected: vec!["Street".to_string()],
            found: vec!["street".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid schema");
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_file_error_display() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/path/to/file.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read file /path/to/file.csv: not found"
        );
        assert!(!err.is_schema_violation());
    }
}

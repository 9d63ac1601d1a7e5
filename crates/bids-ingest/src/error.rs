//! Error types for dataset discovery and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an inventory run.
///
/// Malformed participant tables are not in this list; they are reported as
/// diagnostics and the run continues.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Root directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/data/cpp-lln-lab_raw"),
        };
        assert_eq!(err.to_string(), "directory not found: /data/cpp-lln-lab_raw");
    }
}

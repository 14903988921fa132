//! Error types for csv_codec

use std::io;
use thiserror::Error;

/// Main error type for CSV reading and writing
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error occurred on the underlying source or sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Options violate a construction-time contract
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not allowed in the current reader/writer state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A record could not be reconstructed from the input
    #[error("Malformed record starting at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// Text could not be represented in the configured encoding
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type alias for csv_codec operations
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Whether this error is a malformed-input error (as opposed to a usage or IO error)
    pub fn is_malformed(&self) -> bool {
        matches!(self, CsvError::MalformedRecord { .. })
    }
}

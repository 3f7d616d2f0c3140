//! Error types for the Tally library.
//!
//! Errors only arise while materializing tables or loading configuration.
//! Answering a question never fails: every analytical path produces text.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Columns of a table disagree on their length.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    Shape {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns of a table share a name.
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

//! Error types shared across the ingest workspace

use thiserror::Error;

/// Result type alias for ingest operations
pub type Result<T> = std::result::Result<T, DictyError>;

/// Main error type for the Dictybase ingest
#[derive(Error, Debug)]
pub enum DictyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required column was missing or empty in a source row. Row
    /// processing stops here; a partially populated record is never
    /// emitted.
    #[error("malformed {table} row: required field '{field}' is missing or empty")]
    MalformedRow { table: String, field: String },

    /// Source table or lookup file could not be read into typed rows
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DictyError {
    /// Shorthand for the fatal missing-required-field case
    pub fn malformed_row(table: impl Into<String>, field: impl Into<String>) -> Self {
        DictyError::MalformedRow {
            table: table.into(),
            field: field.into(),
        }
    }
}

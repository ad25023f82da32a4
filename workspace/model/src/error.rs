use std::path::PathBuf;
use thiserror::Error;

/// Error types for loading the sales table
#[derive(Error, Debug)]
pub enum ModelError {
    /// The data file could not be opened or read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV structure or a row that does not match the header
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A numeric cell that is neither empty nor parseable
    #[error("Invalid number '{value}' in column '{column}' at line {line}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// Error while building the in-memory DataFrame
    #[error("DataFrame error: {0}")]
    DataFrame(#[from] polars::error::PolarsError),
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;

//! Error types for crackvis

use thiserror::Error;

/// Main error type for crackvis operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Empty dataset: no data rows in {path}")]
    EmptyDataset { path: String },

    #[error("Invalid scalar range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for crackvis operations
pub type Result<T> = std::result::Result<T, Error>;

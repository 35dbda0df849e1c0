//! Error types for polyreduce

use thiserror::Error;

/// Main error type for polyreduce operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for polyreduce operations
pub type Result<T> = std::result::Result<T, Error>;

//! Unified error handling for modelpack.
//!
//! A single error type for the conversion pipeline, so every module reports
//! failures consistently.

use thiserror::Error;

/// Main error type for model package operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Already exists errors (for creation operations)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Invalid input/argument errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// External command execution errors
    #[error("Command execution failed: {0}")]
    CommandFailed(String),
}

/// Result type alias for model package operations.
pub type PackResult<T> = Result<T, PackError>;

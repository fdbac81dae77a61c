//! Error types for tddmon
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tddmon operations
pub type TddmonResult<T> = Result<T, TddmonError>;

/// Main error type for tddmon operations
#[derive(Error, Debug)]
pub enum TddmonError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file-name pattern (regex or glob) failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A configured test adapter name is not known
    #[error("unknown test adapter '{name}' (expected one of: {expected})")]
    UnknownAdapter { name: String, expected: String },
}

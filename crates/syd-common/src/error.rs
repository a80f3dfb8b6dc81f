//! Error types for the shared library

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, SydError>;

/// Main error type for the shared library
#[derive(Error, Debug)]
pub enum SydError {
    #[error("Invalid timestamp '{value}': expected ISO-8601 date and time")]
    InvalidTimestamp { value: String },
}

impl SydError {
    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }
}

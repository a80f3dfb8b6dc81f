//! Error types for the Syft Datasets CLI
//!
//! Two layers live here. `FetchError`, `ClipboardError` and `QueryError` are
//! what the query module hands to its error observer; they are recovered
//! locally and never escape an operation. `CliError` is what commands
//! return, with messages that tell the user what to try next.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// A backend request that did not produce a usable response
///
/// Network failures, non-2xx statuses and undecodable bodies are all
/// handled the same way by callers; the variants only sharpen the message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unreadable response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Raised by non-HTTP backends (mocks, adapters)
    #[error("{0}")]
    Backend(String),
}

impl FetchError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// The platform refused or lacks a clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
}

/// Any failure the query module reports to its observer
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to {operation}: {source}")]
    Fetch {
        operation: &'static str,
        #[source]
        source: FetchError,
    },

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(#[from] ClipboardError),
}

impl QueryError {
    /// Wrap a fetch failure with the operation that issued it
    pub fn fetch(operation: &'static str, source: FetchError) -> Self {
        Self::Fetch { operation, source }
    }

    /// Whether this is a backend failure rather than a clipboard one
    pub fn is_fetch(&self) -> bool {
        matches!(self, QueryError::Fetch { .. })
    }
}

/// Error type returned by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Backend communication failed while loading datasets
    #[error("{0}. Ensure the datasets server is running (check with 'syd status') and reachable.")]
    Query(#[from] QueryError),

    /// Backend communication failed outside the query module
    #[error("Server error: {0}. Ensure the datasets server is running (check with 'syd status') and reachable.")]
    Fetch(#[from] FetchError),

    /// No dataset matched the requested name or id
    #[error("Dataset '{0}' not found. Run 'syd list' to see available datasets.")]
    DatasetNotFound(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or config file.")]
    Config(String),

    /// Config file could not be parsed
    #[error("Failed to parse config file: {0}. Fix the TOML syntax or delete the file to use defaults.")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written
    #[error("Failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON output failed
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(key: impl Into<String>) -> Self {
        Self::DatasetNotFound(key.into())
    }
}

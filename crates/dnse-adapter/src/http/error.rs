/*
[INPUT]:  Error sources (HTTP transport, URL parsing, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error type for the crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the DNSE adapter.
///
/// Server responses with non-2xx statuses are not errors; only failures that
/// prevent an exchange entirely (transport, assembly) land here.
#[derive(Error, Debug)]
pub enum DnseError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, DnseError>;

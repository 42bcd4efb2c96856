//! Error types for REST API operations
//!
//! The client does not classify failures. Whatever the transport reports is
//! handed back to the caller.

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connect, TLS, body read or JSON decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to parse response into a typed envelope
    #[error("Parse error: {0}")]
    Parse(String),

    /// Query parameters could not be serialized
    #[error("Encode error: {0}")]
    Encode(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for RestError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

//! Error types for the upstream API client.

use cloudscope_core::ScopeError;
use thiserror::Error;

/// Errors that can occur when talking to the upstream track API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream is offline, unreachable or timed out
    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    /// Upstream returned an error response
    #[error("Upstream error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse upstream response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ApiError> for ScopeError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Request(e) => ScopeError::Transport(e.to_string()),
            ApiError::Unreachable(msg) => ScopeError::Transport(msg),
            ApiError::ServerError { status, message } => ScopeError::Upstream { status, message },
            ApiError::ParseError(msg) => ScopeError::Decode(msg),
            ApiError::InvalidUrl(msg) => ScopeError::Config(msg),
        }
    }
}

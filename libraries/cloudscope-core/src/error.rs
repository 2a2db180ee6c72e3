/// Core error types for Cloudscope
use thiserror::Error;

/// Result type alias using `ScopeError`
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Errors surfaced to the host from a Search or Preview call
#[derive(Error, Debug)]
pub enum ScopeError {
    /// Upstream fetch failed at the network level
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// A required result attribute is absent or empty
    #[error("Missing result attribute: {0}")]
    MissingAttribute(String),

    /// The host cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// The host reply channel rejected a push
    #[error("Reply error: {0}")]
    Reply(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScopeError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a missing attribute error
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::MissingAttribute(name.into())
    }

    /// Create a reply error
    pub fn reply(msg: impl Into<String>) -> Self {
        Self::Reply(msg.into())
    }

    /// Whether the error came from the upstream fetch (transport, status or decode)
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Upstream { .. } | Self::Decode(_)
        )
    }
}

impl From<serde_json::Error> for ScopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

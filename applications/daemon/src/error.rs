/// Daemon error types
use cloudscope_api::ApiError;
use cloudscope_core::ScopeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaemonError>;

#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream client error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("No track result at index {index} ({available} available)")]
    NoSuchResult { index: usize, available: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for DaemonError {
    fn from(err: config::ConfigError) -> Self {
        DaemonError::Config(err.to_string())
    }
}

use thiserror::Error;

/// Unified error type for nextver operations
#[derive(Error, Debug)]
pub enum NextverError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a commit or version source, passed through as-is
    #[error("Source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience type alias for Results in nextver
pub type Result<T> = std::result::Result<T, NextverError>;

impl NextverError {
    /// Create a malformed version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        NextverError::MalformedVersion(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextverError::Config(msg.into())
    }

    /// Wrap a collaborator failure without altering it
    pub fn from_source(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        NextverError::Source(err.into())
    }
}

//! Error types for the lookout recorder.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the recorder and its viewer.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected recorder or service configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Rejected viewer query parameter.
    #[error("invalid query: {0}")]
    Query(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}

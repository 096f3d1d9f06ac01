//! Error types for the log-tailing engine.

use thiserror::Error;

/// Errors that can occur while resolving, fetching, or emitting logs.
#[derive(Debug, Error)]
pub enum LogError {
    /// A time expression could not be parsed in any supported format.
    #[error("invalid time expression: {0:?}")]
    InvalidTime(String),

    /// The query configuration is contradictory or incomplete.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The log source reported a failure. Always fatal for the invocation.
    #[error("log source error: {0}")]
    Source(String),

    /// An I/O error occurred while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, LogError>;

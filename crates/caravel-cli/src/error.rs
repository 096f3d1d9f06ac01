//! CLI error types.

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// An error from the log-tailing engine.
    #[error(transparent)]
    Logs(#[from] caravel_logs::LogError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

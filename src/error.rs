//! Error types for pomolock.

use thiserror::Error;

/// Errors that can occur in pomolock.
#[derive(Error, Debug)]
pub enum PomolockError {
    /// Configuration is missing, unreadable, or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

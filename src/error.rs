//! Error types for focustimer.

use thiserror::Error;

/// Errors produced by focustimer.
#[derive(Debug, Error)]
pub enum FocusTimerError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A user-supplied setting was rejected.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FocusTimerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<serde_yaml::Error> for FocusTimerError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(format!("YAML error: {e}"))
    }
}

//! TUI error types

use thiserror::Error;

/// Errors that can occur while running the terminal frontend
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error from the terminal backend
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, UiError>;

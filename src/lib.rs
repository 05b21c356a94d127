//! Staffdir - a searchable staff directory browser for the terminal
//!
//! This library models a staff directory as a page of sections, one
//! per department, and provides a live search widget over it: typing
//! filters entries with a debounce, matched entries and sections
//! surface first, and a results panel summarizes the matches. The
//! render tree is abstracted behind a trait so the pipeline runs the
//! same against the in-memory page, the terminal frontend, and mocks.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod page;
pub mod roster;
pub mod search;
pub mod surface;
pub mod tui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum StaffdirError {
    /// Roster loading error
    #[error("Roster error: {0}")]
    RosterError(#[from] roster::RosterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal frontend error
    #[error("UI error: {0}")]
    UiError(#[from] tui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

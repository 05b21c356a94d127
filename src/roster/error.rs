use std::io;
use thiserror::Error;

/// Errors arising while loading a roster file
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Roster IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Roster parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

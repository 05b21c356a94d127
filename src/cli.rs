//! Command-line interface definitions and parsing
//!
//! Flags override the configuration file; everything is optional so a
//! bare `staffdir` opens the built-in sample directory in the TUI.
//! Passing `--query` runs one search and prints the matches instead
//! of starting the interactive browser.

use crate::surface::ViewMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// View mode argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    /// Card grid per department
    Grid,
    /// One table row per person
    Table,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => Self::Grid,
            ViewArg::Table => Self::Table,
        }
    }
}

/// Browse and search a staff directory in the terminal
#[derive(Parser, Debug)]
#[command(name = "staffdir", version, about)]
pub struct Cli {
    /// Roster JSON file (defaults to the configured roster, then a
    /// built-in sample)
    #[arg(value_name = "ROSTER")]
    pub roster: Option<PathBuf>,

    /// Initial view mode
    #[arg(short, long, value_enum)]
    pub view: Option<ViewArg>,

    /// Debounce delay for live typing, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Minimum query length before filtering kicks in
    #[arg(long, value_name = "N")]
    pub min_chars: Option<usize>,

    /// Run one search and print the matches instead of opening the TUI
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Suppress informational output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["staffdir"]);
        assert!(cli.roster.is_none());
        assert!(cli.view.is_none());
        assert!(cli.query.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::parse_from([
            "staffdir",
            "people.json",
            "--view",
            "table",
            "--debounce-ms",
            "250",
            "--min-chars",
            "2",
            "--query",
            "grace",
            "--quiet",
        ]);
        assert_eq!(cli.roster, Some(PathBuf::from("people.json")));
        assert_eq!(cli.view, Some(ViewArg::Table));
        assert_eq!(cli.debounce_ms, Some(250));
        assert_eq!(cli.min_chars, Some(2));
        assert_eq!(cli.query.as_deref(), Some("grace"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_view_arg_conversion() {
        assert_eq!(ViewMode::from(ViewArg::Grid), ViewMode::Grid);
        assert_eq!(ViewMode::from(ViewArg::Table), ViewMode::Table);
    }
}

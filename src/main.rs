//! Staffdir CLI application entry point
//!
//! Opens a roster file (or the built-in sample) in an interactive
//! terminal browser with live search, or runs a single search from
//! the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the configured roster interactively
//! staffdir
//!
//! # Browse a specific roster file
//! staffdir people.json
//!
//! # Start in table view with a snappier debounce
//! staffdir people.json --view table --debounce-ms 200
//!
//! # One-shot search, no TUI
//! staffdir people.json --query grace
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/staffdir/config.toml` on Linux).

use colored::Colorize;
use staffdir::{
    StaffdirError,
    cli::Cli,
    config::StaffdirConfig,
    page::PageTree,
    roster::Directory,
    search::{DirectoryController, SearchOptions},
    surface::{RenderSurface, ViewMode},
    tui,
};
use std::time::Duration;

type Result<T> = std::result::Result<T, StaffdirError>;

/// Resolve the directory to browse: CLI path, configured path, or the
/// built-in sample
fn load_directory(cli: &Cli, config: &StaffdirConfig, quiet: bool) -> Result<Directory> {
    if let Some(path) = cli.roster.as_ref().or(config.roster.as_ref()) {
        return Ok(Directory::from_json_file(path)?);
    }
    if !quiet {
        eprintln!("{}", "No roster given, using the built-in sample.".dimmed());
    }
    Ok(Directory::sample())
}

fn resolve_options(cli: &Cli, config: &StaffdirConfig) -> SearchOptions {
    SearchOptions {
        debounce: cli
            .debounce_ms
            .map_or_else(|| config.debounce(), Duration::from_millis),
        min_query_chars: cli.min_chars.unwrap_or(config.min_query_chars),
        initial_mode: cli
            .view
            .map_or(config.default_view, ViewMode::from),
    }
}

/// Run one search against the page and print the matches
fn run_oneshot(page: &mut PageTree, controller: &mut DirectoryController, query: &str) {
    page.set_input_value(query);
    controller.run_filter(page, query);

    match page.summary() {
        Some(panel) => {
            println!("{}", panel.heading.bold());
            for kind in [ViewMode::Grid, ViewMode::Table] {
                for container in page.containers(kind) {
                    let Some(section) = page.section_of(container) else {
                        continue;
                    };
                    let section_title = page
                        .section_title(section)
                        .unwrap_or_default()
                        .to_string();
                    for entry in page.entries(container) {
                        if !page.entry_matched(entry) {
                            continue;
                        }
                        if let Some(person) = page.entry_person(entry) {
                            println!(
                                "  {}  {}  {}",
                                person.name.green(),
                                person.position,
                                section_title.dimmed()
                            );
                        }
                    }
                }
            }
        }
        None => println!("{}", "No matches.".dimmed()),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = StaffdirConfig::load().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Warning: could not load config:".yellow());
        StaffdirConfig::default()
    });
    let quiet = cli.quiet || config.quiet;

    let directory = load_directory(&cli, &config, quiet)?;
    let options = resolve_options(&cli, &config);

    let mut page = PageTree::build(&directory);
    let mut controller = DirectoryController::attach(&mut page, options).ok_or_else(|| {
        StaffdirError::InvalidInput("The directory page is missing its search controls".into())
    })?;

    if let Some(query) = &cli.query {
        run_oneshot(&mut page, &mut controller, query);
        return Ok(());
    }

    tui::run(&mut page, &mut controller)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

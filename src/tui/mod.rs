//! Ratatui-based terminal frontend
//!
//! Draws the page tree as a scrollable document: controls hint,
//! results panel, then one block per section in the tree's current
//! order. All filtering state lives in the page and the controller;
//! the frontend only edits the query line, forwards events, and
//! follows scroll targets the controller requests.

pub mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use error::{Result, UiError};
pub use events::EventResult;
pub use state::UiState;
pub use theme::Theme;

use crate::page::{PageTree, Reveal};
use crate::search::{DirectoryController, InputKey};
use crate::surface::{RenderSurface, ViewMode};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use events::poll_and_handle;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::collections::HashMap;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use widgets::{HelpBar, KeyHint, SearchBar, card_lines, header_line, panel_lines, row_line};

const TICK: Duration = Duration::from_millis(50);

/// Run the directory browser until the user quits
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or an IO
/// operation on it fails.
pub fn run(page: &mut PageTree, controller: &mut DirectoryController) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, page, controller);
    if let Err(e) = cleanup_terminal() {
        eprintln!("Warning: terminal cleanup failed: {e}");
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    page: &mut PageTree,
    controller: &mut DirectoryController,
) -> Result<()> {
    let theme = Theme::default();
    let hints = HelpBar::default_hints();
    let mut state = UiState::new();
    state.set_input(&page.input_value());

    loop {
        let (lines, anchors) = compose_document(page, &theme);

        if let Some(target) = page.take_scroll_target()
            && let Some(&line) = anchors.get(&target)
        {
            state.scroll = line.saturating_sub(1);
        }
        state.scroll = state.scroll.min(lines.len().saturating_sub(1));

        let pending = controller.next_deadline().is_some();
        terminal.draw(|frame| render(frame, &state, &lines, pending, &hints, &theme))?;

        let now = Instant::now();
        let timeout = controller
            .next_deadline()
            .map_or(TICK, |deadline| deadline.saturating_duration_since(now).min(TICK));

        match poll_and_handle(&mut state, timeout)? {
            EventResult::Quit => break,
            EventResult::QueryChanged => {
                page.set_input_value(&state.input);
                controller.handle_input(&state.input, Instant::now());
            }
            EventResult::Submit => {
                page.set_input_value(&state.input);
                controller.handle_key(page, InputKey::Submit);
            }
            EventResult::ClearInput => {
                controller.handle_key(page, InputKey::Clear);
                state.set_input(&page.input_value());
            }
            EventResult::SetMode(mode) => controller.set_mode(page, mode),
            EventResult::Continue | EventResult::Ignored => {}
        }

        controller.tick(page, Instant::now());
    }

    Ok(())
}

fn render(
    frame: &mut Frame,
    state: &UiState,
    lines: &[Line<'static>],
    pending: bool,
    hints: &[KeyHint],
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Directory document
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let search_bar = SearchBar::new(&state.input, state.cursor, theme).pending(pending);
    frame.render_widget(search_bar, layout[0]);

    let scroll = u16::try_from(state.scroll).unwrap_or(u16::MAX);
    let document = Paragraph::new(lines.to_vec()).scroll((scroll, 0));
    frame.render_widget(document, layout[1]);

    let help_bar = HelpBar::new(hints, theme);
    frame.render_widget(help_bar, layout[2]);
}

/// Flatten the page tree into document lines plus anchor positions
///
/// Anchors map each revealable element to its first line, so a scroll
/// target from the controller can be turned into a scroll offset.
fn compose_document(
    page: &PageTree,
    theme: &Theme,
) -> (Vec<Line<'static>>, HashMap<Reveal, usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors = HashMap::new();

    if let Some(title) = page.title() {
        lines.push(Line::from(Span::styled(
            title.to_string(),
            theme.heading_style(),
        )));
        lines.push(Line::default());
    }

    if page.controls_section().is_none()
        && let Some(panel) = page.summary()
    {
        anchors.insert(Reveal::Summary, lines.len());
        lines.extend(panel_lines(panel, theme));
    }

    for section in page.sections() {
        if Some(section) == page.controls_section() {
            anchors.insert(Reveal::Section(section), lines.len());
            lines.push(Line::from(Span::styled(
                "Type to filter · F2 cards · F3 table".to_string(),
                theme.dimmed_style(),
            )));
            lines.push(Line::default());
            if let Some(panel) = page.summary() {
                anchors.insert(Reveal::Summary, lines.len());
                lines.extend(panel_lines(panel, theme));
            }
            continue;
        }

        anchors.insert(Reveal::Section(section), lines.len());
        let marker = if page.section_matched(section) {
            "● "
        } else {
            "  "
        };
        let title = page.section_title(section).unwrap_or_default().to_string();
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), theme.match_style()),
            Span::styled(title, theme.heading_style()),
        ]));

        let Some(kind) = page.section_kind(section) else {
            lines.push(Line::default());
            continue;
        };
        // Hidden view modes keep only the section heading visible
        if !page.kind_visible(kind) {
            lines.push(Line::default());
            continue;
        }
        let Some(container) = page.section_container(section) else {
            lines.push(Line::default());
            continue;
        };

        if kind == ViewMode::Table {
            lines.push(header_line(theme));
        }
        for entry in page.entries(container) {
            anchors.insert(Reveal::Entry(entry), lines.len());
            match kind {
                ViewMode::Grid => {
                    if let Some(person) = page.entry_person(entry) {
                        lines.extend(card_lines(person, page.entry_matched(entry), theme));
                    }
                }
                ViewMode::Table => {
                    if let Some(cells) = page.row_cells(entry) {
                        lines.push(row_line(&cells, page.entry_matched(entry), theme));
                    }
                }
            }
        }
        lines.push(Line::default());
    }

    (lines, anchors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Directory;
    use crate::search::SearchOptions;

    fn document_text(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_compose_document_lists_all_sections() {
        let page = PageTree::build(&Directory::sample());
        let theme = Theme::default();
        let (lines, anchors) = compose_document(&page, &theme);

        let text = document_text(&lines);
        assert!(text.contains("Staff directory"));
        assert!(text.contains("Engineering"));
        assert!(text.contains("Operations"));
        for section in page.sections() {
            assert!(anchors.contains_key(&Reveal::Section(section)));
        }
    }

    #[test]
    fn test_compose_document_hides_invisible_kind() {
        let mut page = PageTree::build(&Directory::sample());
        let mut controller =
            DirectoryController::attach(&mut page, SearchOptions::default()).expect("attach");

        // Grid mode: table rows are not drawn, grid cards are
        let theme = Theme::default();
        let (lines, _) = compose_document(&page, &theme);
        let text = document_text(&lines);
        assert!(text.contains("Ada Lovelace"));
        assert!(!text.contains("Jean Bartik"));

        controller.set_mode(&mut page, ViewMode::Table);
        let (lines, _) = compose_document(&page, &theme);
        let text = document_text(&lines);
        assert!(!text.contains("ada@example.org"));
        assert!(text.contains("Jean Bartik"));
    }

    #[test]
    fn test_compose_document_anchors_summary() {
        let mut page = PageTree::build(&Directory::sample());
        let mut controller =
            DirectoryController::attach(&mut page, SearchOptions::default()).expect("attach");
        controller.run_filter(&mut page, "grace");

        let theme = Theme::default();
        let (lines, anchors) = compose_document(&page, &theme);
        let summary_line = anchors[&Reveal::Summary];
        let text = document_text(&lines[summary_line..=summary_line]);
        assert!(text.contains("Search results"));
    }

    #[test]
    fn test_compose_document_matched_section_marker() {
        let mut page = PageTree::build(&Directory::sample());
        let mut controller =
            DirectoryController::attach(&mut page, SearchOptions::default()).expect("attach");
        controller.run_filter(&mut page, "ada lovelace");

        let theme = Theme::default();
        let (lines, anchors) = compose_document(&page, &theme);
        let sections = page.sections();
        // Matched Engineering section sits right after controls
        let engineering = sections[1];
        assert!(page.section_matched(engineering));
        let line = anchors[&Reveal::Section(engineering)];
        let text = document_text(&lines[line..=line]);
        assert!(text.contains('●'));
    }
}

//! Event handling for the terminal frontend
//!
//! Maps keyboard events to query edits, immediate-run keys, view-mode
//! switches, and scrolling. The caller feeds the returned result into
//! the directory controller.

use super::error::Result;
use super::state::UiState;
use crate::surface::ViewMode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

const PAGE_LINES: usize = 10;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// No action taken
    Ignored,
    /// Exit the frontend
    Quit,
    /// The query text changed, schedule a debounced run
    QueryChanged,
    /// Enter: run the pipeline immediately
    Submit,
    /// Escape: clear the query and run immediately
    ClearInput,
    /// Switch the directory to the given view mode
    SetMode(ViewMode),
}

/// Handle a single key event against the view state
pub fn handle_key(state: &mut UiState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            if state.input.is_empty() {
                EventResult::Quit
            } else {
                EventResult::ClearInput
            }
        }
        (KeyCode::Enter, _) => EventResult::Submit,
        (KeyCode::F(2), _) => EventResult::SetMode(ViewMode::Grid),
        (KeyCode::F(3), _) => EventResult::SetMode(ViewMode::Table),

        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.insert_char(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.backspace() {
                EventResult::QueryChanged
            } else {
                EventResult::Continue
            }
        }
        (KeyCode::Delete, _) => {
            if state.delete() {
                EventResult::QueryChanged
            } else {
                EventResult::Continue
            }
        }

        (KeyCode::Left, _) => {
            state.move_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.move_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.move_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.move_end();
            EventResult::Continue
        }

        (KeyCode::Up, _) => {
            state.scroll_up(1);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.scroll_down(1);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.scroll_up(PAGE_LINES);
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.scroll_down(PAGE_LINES);
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Poll for an event with a timeout and handle it
///
/// # Errors
///
/// Returns an error when reading from the terminal fails.
pub fn poll_and_handle(state: &mut UiState, timeout: Duration) -> Result<EventResult> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => Ok(handle_key(state, key)),
            _ => Ok(EventResult::Ignored),
        }
    } else {
        Ok(EventResult::Continue)
    }
}

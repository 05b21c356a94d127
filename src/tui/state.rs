//! TUI view state
//!
//! Holds the editable query line and the document scroll position.
//! The directory state itself lives in the page tree; this is only
//! what the terminal needs to draw and edit.

/// Mutable state of the terminal frontend
#[derive(Debug, Default)]
pub struct UiState {
    /// Current query text as typed
    pub input: String,
    /// Cursor byte offset into `input`, always on a char boundary
    pub cursor: usize,
    /// Top visible line of the document
    pub scroll: usize,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl UiState {
    /// Create a fresh state with an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.input.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.input.len() {
            return false;
        }
        let next = self.next_boundary();
        self.input.replace_range(self.cursor..next, "");
        true
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor = self.next_boundary();
        }
    }

    /// Move the cursor to the start of the input
    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the input
    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Replace the input wholesale, cursor at the end
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.input.len();
    }

    /// Scroll the document up by `n` lines
    pub const fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Scroll the document down by `n` lines
    pub const fn scroll_down(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_add(n);
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.input[self.cursor..]
            .chars()
            .next()
            .map_or(self.input.len(), |c| self.cursor + c.len_utf8())
    }
}

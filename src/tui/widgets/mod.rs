//! Widgets for the terminal frontend

mod entry_card;
mod entry_table;
mod help_bar;
mod results_panel;
mod search_bar;

pub use entry_card::card_lines;
pub use entry_table::{header_line, row_line};
pub use help_bar::{HelpBar, KeyHint};
pub use results_panel::{markup_to_text, panel_lines};
pub use search_bar::SearchBar;

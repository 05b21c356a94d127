//! Row rendering for table-layout departments

use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};

/// Fixed column widths: name, position, email, location, corr code
const WIDTHS: [usize; 5] = [22, 16, 26, 14, 8];
const HEADERS: [&str; 5] = ["Name", "Position", "Email", "Location", "Corr"];

fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// The table's header line
#[must_use]
pub fn header_line(theme: &Theme) -> Line<'static> {
    let cells: Vec<String> = HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(h, w)| pad(h, w))
        .collect();
    Line::from(vec![
        Span::raw("  "),
        Span::styled(cells.join(" "), theme.dimmed_style()),
    ])
}

/// Render one row of cell texts
#[must_use]
pub fn row_line(cells: &[String], matched: bool, theme: &Theme) -> Line<'static> {
    let padded: Vec<String> = WIDTHS
        .iter()
        .enumerate()
        .map(|(i, &w)| pad(cells.get(i).map_or("", String::as_str), w))
        .collect();

    let style = if matched {
        theme.match_style()
    } else {
        theme.normal_style()
    };
    let marker = if matched { "▌ " } else { "  " };

    Line::from(vec![
        Span::styled(marker.to_string(), theme.match_style()),
        Span::styled(padded.join(" "), style),
    ])
}

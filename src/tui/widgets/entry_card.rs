//! Card rendering for grid-layout departments

use crate::roster::Person;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};

/// Render one person as a block of card lines
///
/// Matched cards get a marker and the match highlight on the name
/// line; the detail lines are shared with the unmatched rendering.
#[must_use]
pub fn card_lines(person: &Person, matched: bool, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = if matched {
        theme.match_style()
    } else {
        theme.normal_style()
    };
    let marker = if matched { "▌ " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), theme.match_style()),
        Span::styled(person.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(person.position.clone(), theme.dimmed_style()),
    ])];

    if !person.email.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(person.email.clone(), theme.link_style()),
        ]));
    }
    let mut details = Vec::new();
    if !person.location.is_empty() {
        details.push(person.location.clone());
    }
    if !person.corr_code.is_empty() {
        details.push(person.corr_code.clone());
    }
    if !details.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(details.join("  ·  "), theme.dimmed_style()),
        ]));
    }

    lines
}

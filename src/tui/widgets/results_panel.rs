//! Results summary panel rendering
//!
//! Summary cards carry their content as escaped markup strings; the
//! terminal shows them as plain text, so tags are stripped and the
//! five standard entities decoded before display.

use crate::surface::SummaryPanel;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};

/// Strip markup tags and decode entities for terminal display
#[must_use]
pub fn markup_to_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut chars = markup.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                // Closing a block element reads as a break
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                }
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            '&' => {
                let mut entity = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ';' {
                        chars.next();
                        break;
                    }
                    if entity.len() > 5 {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }
                match entity.as_str() {
                    "amp" => out.push('&'),
                    "lt" => out.push('<'),
                    "gt" => out.push('>'),
                    "quot" => out.push('"'),
                    "#39" => out.push('\''),
                    other => {
                        out.push('&');
                        out.push_str(other);
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the panel as a block of document lines
#[must_use]
pub fn panel_lines(panel: &SummaryPanel, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        panel.heading.clone(),
        theme.summary_style(),
    ))];
    for card in &panel.cards {
        lines.push(Line::from(vec![
            Span::styled("  • ".to_string(), theme.dimmed_style()),
            Span::raw(markup_to_text(&card.markup)),
        ]));
    }
    lines.push(Line::default());
    lines
}

//! Results summary panel construction
//!
//! The panel is rebuilt from scratch on every query: a heading with
//! the total match count, then one card per matched grid entry
//! (cloned markup) and one synthesized card per matched table row.
//! Every piece of directory data embedded in synthesized markup goes
//! through [`escape_markup`] so row content can never inject live
//! markup into the panel.

use crate::surface::{SummaryCard, SummaryPanel};

/// Escape the five markup metacharacters: `&`, `<`, `>`, `"`, `'`
#[must_use]
pub fn escape_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Summary card cloned from a matched grid entry's card markup
#[must_use]
pub fn cloned_card(markup: &str) -> SummaryCard {
    SummaryCard {
        markup: markup.to_string(),
    }
}

/// Synthesize a compact summary card from a table row's cell sequence
///
/// Fields are taken by fixed cell position: name, position, email,
/// location, correlation code. Missing cells read as empty, and
/// empty fields drop their paragraph from the markup.
#[must_use]
pub fn card_from_cells(cells: &[String]) -> SummaryCard {
    let field = |i: usize| -> String {
        cells.get(i).map(|c| c.trim().to_string()).unwrap_or_default()
    };
    let name = field(0);
    let position = field(1);
    let email = field(2);
    let location = field(3);
    let corr = field(4);

    let mut markup = format!(
        "<h4>{} <span class=\"position\">{}</span></h4>",
        escape_markup(&name),
        escape_markup(&position)
    );
    if !email.is_empty() {
        let email = escape_markup(&email);
        markup.push_str(&format!(
            "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>"
        ));
    }
    if !location.is_empty() {
        markup.push_str(&format!(
            "<p><strong>Location:</strong> {}</p>",
            escape_markup(&location)
        ));
    }
    if !corr.is_empty() {
        markup.push_str(&format!(
            "<p><strong>Corr. Code:</strong> {}</p>",
            escape_markup(&corr)
        ));
    }

    SummaryCard { markup }
}

/// Assemble the panel, or `None` when there is nothing to show
///
/// Callers pass grid cards before table cards; the heading states the
/// combined count.
#[must_use]
pub fn build_panel(cards: Vec<SummaryCard>) -> Option<SummaryPanel> {
    if cards.is_empty() {
        return None;
    }
    let heading = format!("Search results - showing {} item(s)", cards.len());
    Some(SummaryPanel { heading, cards })
}

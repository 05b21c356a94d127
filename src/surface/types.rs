//! Common types for the render surface abstraction layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a top-level page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u32);

/// Identifier for a grid or table container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u32);

/// Identifier for a directory entry (a card or a row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

/// Presentation mode for the directory
///
/// Exactly one mode is visible at a time; containers of the other
/// kind are hidden wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ViewMode {
    /// Card grid presentation
    #[default]
    Grid,
    /// Tabular presentation
    Table,
}

impl ViewMode {
    /// The opposite mode
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Grid => Self::Table,
            Self::Table => Self::Grid,
        }
    }

    /// Convert to string representation for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A compact card in the results summary panel
///
/// Carries pre-rendered markup: either a clone of a matched grid card
/// or a card synthesized from a matched table row's cells. All
/// directory data embedded in the markup has been escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Rendered card markup
    pub markup: String,
}

/// The consolidated results summary panel
///
/// Rebuilt from scratch on every query; absent entirely when the
/// query is empty or nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPanel {
    /// Heading stating the total match count
    pub heading: String,
    /// One card per matched entry, grid cards before table cards
    pub cards: Vec<SummaryCard>,
}

impl SummaryPanel {
    /// Total number of matched entries represented in the panel
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

//! Core trait for the render surface abstraction

use super::types::{ContainerId, EntryId, SectionId, SummaryPanel, ViewMode};

/// Trait abstracting the host page's render tree
///
/// The directory search controller never touches a concrete page
/// directly; it reads structure through this trait and applies
/// batched mutations through it. This allows the in-memory page
/// tree, the terminal frontend, and a mock implementation to be
/// swapped freely, and keeps the whole filter/reorder/summary
/// pipeline testable without a real render tree.
///
/// All operations are best-effort: querying an id the surface does
/// not know about returns an empty/`None` answer, and mutations on
/// unknown ids are silently ignored.
pub trait RenderSurface {
    // --- structural probes -------------------------------------------------

    /// Whether the page provides the single search input control
    fn has_search_input(&self) -> bool;

    /// Whether the page provides both view-mode toggle controls
    fn has_view_toggles(&self) -> bool;

    /// Whether the page provides the main region holding the sections
    fn has_main_region(&self) -> bool;

    // --- structure queries -------------------------------------------------

    /// Top-level sections in their current render order
    fn sections(&self) -> Vec<SectionId>;

    /// The designated controls section, if the page has one
    fn controls_section(&self) -> Option<SectionId>;

    /// All containers of the given kind, in document order
    fn containers(&self, kind: ViewMode) -> Vec<ContainerId>;

    /// The section a container belongs to
    fn section_of(&self, container: ContainerId) -> Option<SectionId>;

    /// Entries of a container in their current render order
    fn entries(&self, container: ContainerId) -> Vec<EntryId>;

    // --- entry data --------------------------------------------------------

    /// Searchable text for an entry: the explicit search blob when one
    /// was provided, otherwise the entry's full visible text
    fn search_text(&self, entry: EntryId) -> String;

    /// Card markup for a grid entry (`None` for table rows)
    fn card_markup(&self, entry: EntryId) -> Option<String>;

    /// Cell text sequence for a table row (`None` for grid cards)
    fn row_cells(&self, entry: EntryId) -> Option<Vec<String>>;

    // --- batched mutations -------------------------------------------------

    /// Reorder a container's entries to the given order in one update
    fn apply_entry_order(&mut self, container: ContainerId, order: &[EntryId]);

    /// Reorder the top-level sections to the given order in one update
    fn apply_section_order(&mut self, order: &[SectionId]);

    /// Set or clear an entry's matched flag
    fn set_entry_matched(&mut self, entry: EntryId, matched: bool);

    /// Set or clear a section's has-match status
    fn set_section_matched(&mut self, section: SectionId, matched: bool);

    /// Show or hide every container of the given kind
    fn set_kind_visible(&mut self, kind: ViewMode, visible: bool);

    /// Update the pressed/active state of one view toggle control
    fn set_toggle_pressed(&mut self, kind: ViewMode, pressed: bool);

    // --- summary panel -----------------------------------------------------

    /// Replace the summary panel's content and make it visible
    fn show_summary(&mut self, panel: SummaryPanel);

    /// Clear the summary panel and hide it
    fn clear_summary(&mut self);

    // --- input control -----------------------------------------------------

    /// Current value of the search input
    fn input_value(&self) -> String;

    /// Overwrite the search input's value
    fn set_input_value(&mut self, value: &str);

    /// Return keyboard focus to the search input
    fn focus_input(&mut self);

    // --- scrolling ---------------------------------------------------------

    /// Bring an entry into view
    fn reveal_entry(&mut self, entry: EntryId);

    /// Bring a section into view
    fn reveal_section(&mut self, section: SectionId);

    /// Bring the summary panel into view
    fn reveal_summary(&mut self);
}

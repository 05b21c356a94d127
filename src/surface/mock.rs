//! Mock render surface for testing
//!
//! A scriptable in-memory surface with an operation log, so controller
//! tests can assert both the resulting state and the calls the
//! controller made, without building a full page tree.

use super::traits::RenderSurface;
use super::types::{ContainerId, EntryId, SectionId, SummaryPanel, ViewMode};

/// A mutation recorded by the mock, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    /// `apply_entry_order` with the requested order
    EntryOrder(ContainerId, Vec<EntryId>),
    /// `apply_section_order` with the requested order
    SectionOrder(Vec<SectionId>),
    /// `reveal_entry`
    RevealEntry(EntryId),
    /// `reveal_section`
    RevealSection(SectionId),
    /// `reveal_summary`
    RevealSummary,
    /// `focus_input`
    FocusInput,
    /// `show_summary` with the panel's card count
    ShowSummary(usize),
    /// `clear_summary`
    ClearSummary,
}

#[derive(Debug, Clone)]
struct MockEntry {
    id: EntryId,
    text: String,
    markup: Option<String>,
    cells: Option<Vec<String>>,
    matched: bool,
}

#[derive(Debug, Clone)]
struct MockContainer {
    id: ContainerId,
    kind: ViewMode,
    section: SectionId,
    entries: Vec<MockEntry>,
}

#[derive(Debug, Clone)]
struct MockSection {
    id: SectionId,
    matched: bool,
}

/// Mock render surface with predetermined structure
pub struct MockSurface {
    has_input: bool,
    has_toggles: bool,
    has_main: bool,
    sections: Vec<MockSection>,
    containers: Vec<MockContainer>,
    controls: Option<SectionId>,
    input_value: String,
    summary: Option<SummaryPanel>,
    grid_visible: bool,
    table_visible: bool,
    grid_pressed: bool,
    table_pressed: bool,
    /// Every mutation the controller performed, in order
    pub ops: Vec<SurfaceOp>,
    next_section: u32,
    next_container: u32,
    next_entry: u32,
}

impl MockSurface {
    /// Create an empty mock with all required root elements present
    #[must_use]
    pub fn new() -> Self {
        Self {
            has_input: true,
            has_toggles: true,
            has_main: true,
            sections: Vec::new(),
            containers: Vec::new(),
            controls: None,
            input_value: String::new(),
            summary: None,
            grid_visible: true,
            table_visible: true,
            grid_pressed: false,
            table_pressed: false,
            ops: Vec::new(),
            next_section: 0,
            next_container: 0,
            next_entry: 0,
        }
    }

    /// Remove the search input (for testing initialization decline)
    #[must_use]
    pub fn without_input(mut self) -> Self {
        self.has_input = false;
        self
    }

    /// Remove the view toggles (for testing initialization decline)
    #[must_use]
    pub fn without_toggles(mut self) -> Self {
        self.has_toggles = false;
        self
    }

    /// Remove the main region (for testing initialization decline)
    #[must_use]
    pub fn without_main(mut self) -> Self {
        self.has_main = false;
        self
    }

    /// Add the designated controls section
    pub fn add_controls_section(&mut self) -> SectionId {
        let id = self.push_section();
        self.controls = Some(id);
        id
    }

    /// Add a plain content section
    pub fn add_section(&mut self) -> SectionId {
        self.push_section()
    }

    fn push_section(&mut self) -> SectionId {
        let id = SectionId(self.next_section);
        self.next_section += 1;
        self.sections.push(MockSection { id, matched: false });
        id
    }

    /// Add a grid container with one card per search text
    pub fn add_grid(&mut self, section: SectionId, texts: &[&str]) -> (ContainerId, Vec<EntryId>) {
        let id = ContainerId(self.next_container);
        self.next_container += 1;

        let entries: Vec<MockEntry> = texts
            .iter()
            .map(|text| {
                let entry_id = EntryId(self.next_entry);
                self.next_entry += 1;
                MockEntry {
                    id: entry_id,
                    text: (*text).to_string(),
                    markup: Some(format!("<article class=\"card\">{text}</article>")),
                    cells: None,
                    matched: false,
                }
            })
            .collect();
        let ids = entries.iter().map(|e| e.id).collect();

        self.containers.push(MockContainer {
            id,
            kind: ViewMode::Grid,
            section,
            entries,
        });
        (id, ids)
    }

    /// Add a table container with one row per cell sequence
    pub fn add_table(&mut self, section: SectionId, rows: &[&[&str]]) -> (ContainerId, Vec<EntryId>) {
        let id = ContainerId(self.next_container);
        self.next_container += 1;

        let entries: Vec<MockEntry> = rows
            .iter()
            .map(|cells| {
                let entry_id = EntryId(self.next_entry);
                self.next_entry += 1;
                let cells: Vec<String> = cells.iter().map(|c| (*c).to_string()).collect();
                MockEntry {
                    id: entry_id,
                    text: cells.join(" "),
                    markup: None,
                    cells: Some(cells),
                    matched: false,
                }
            })
            .collect();
        let ids = entries.iter().map(|e| e.id).collect();

        self.containers.push(MockContainer {
            id,
            kind: ViewMode::Table,
            section,
            entries,
        });
        (id, ids)
    }

    /// Current entry order of a container
    #[must_use]
    pub fn entry_order(&self, container: ContainerId) -> Vec<EntryId> {
        self.entries(container)
    }

    /// Current top-level section order
    #[must_use]
    pub fn section_order(&self) -> Vec<SectionId> {
        self.sections()
    }

    /// Whether an entry carries the matched flag
    #[must_use]
    pub fn entry_matched(&self, entry: EntryId) -> bool {
        self.find_entry(entry).is_some_and(|e| e.matched)
    }

    /// Whether a section carries the has-match status
    #[must_use]
    pub fn section_matched(&self, section: SectionId) -> bool {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .is_some_and(|s| s.matched)
    }

    /// The current summary panel, if visible
    #[must_use]
    pub const fn summary(&self) -> Option<&SummaryPanel> {
        self.summary.as_ref()
    }

    /// Current search input value
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input_value
    }

    /// Whether containers of a kind are currently shown
    #[must_use]
    pub const fn kind_visible(&self, kind: ViewMode) -> bool {
        match kind {
            ViewMode::Grid => self.grid_visible,
            ViewMode::Table => self.table_visible,
        }
    }

    /// Whether a toggle control is in its pressed/active state
    #[must_use]
    pub const fn toggle_pressed(&self, kind: ViewMode) -> bool {
        match kind {
            ViewMode::Grid => self.grid_pressed,
            ViewMode::Table => self.table_pressed,
        }
    }

    fn find_entry(&self, entry: EntryId) -> Option<&MockEntry> {
        self.containers
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.id == entry)
    }

    fn find_entry_mut(&mut self, entry: EntryId) -> Option<&mut MockEntry> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.entries.iter_mut())
            .find(|e| e.id == entry)
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for MockSurface {
    fn has_search_input(&self) -> bool {
        self.has_input
    }

    fn has_view_toggles(&self) -> bool {
        self.has_toggles
    }

    fn has_main_region(&self) -> bool {
        self.has_main
    }

    fn sections(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }

    fn controls_section(&self) -> Option<SectionId> {
        self.controls
    }

    fn containers(&self, kind: ViewMode) -> Vec<ContainerId> {
        self.containers
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect()
    }

    fn section_of(&self, container: ContainerId) -> Option<SectionId> {
        self.containers
            .iter()
            .find(|c| c.id == container)
            .map(|c| c.section)
    }

    fn entries(&self, container: ContainerId) -> Vec<EntryId> {
        self.containers
            .iter()
            .find(|c| c.id == container)
            .map(|c| c.entries.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    fn search_text(&self, entry: EntryId) -> String {
        self.find_entry(entry).map(|e| e.text.clone()).unwrap_or_default()
    }

    fn card_markup(&self, entry: EntryId) -> Option<String> {
        self.find_entry(entry).and_then(|e| e.markup.clone())
    }

    fn row_cells(&self, entry: EntryId) -> Option<Vec<String>> {
        self.find_entry(entry).and_then(|e| e.cells.clone())
    }

    fn apply_entry_order(&mut self, container: ContainerId, order: &[EntryId]) {
        self.ops.push(SurfaceOp::EntryOrder(container, order.to_vec()));
        if let Some(c) = self.containers.iter_mut().find(|c| c.id == container) {
            let mut remaining = std::mem::take(&mut c.entries);
            let mut ordered = Vec::with_capacity(remaining.len());
            for &id in order {
                if let Some(pos) = remaining.iter().position(|e| e.id == id) {
                    ordered.push(remaining.remove(pos));
                }
            }
            ordered.extend(remaining);
            c.entries = ordered;
        }
    }

    fn apply_section_order(&mut self, order: &[SectionId]) {
        self.ops.push(SurfaceOp::SectionOrder(order.to_vec()));
        let mut remaining = std::mem::take(&mut self.sections);
        let mut ordered = Vec::with_capacity(remaining.len());
        for &id in order {
            if let Some(pos) = remaining.iter().position(|s| s.id == id) {
                ordered.push(remaining.remove(pos));
            }
        }
        ordered.extend(remaining);
        self.sections = ordered;
    }

    fn set_entry_matched(&mut self, entry: EntryId, matched: bool) {
        if let Some(e) = self.find_entry_mut(entry) {
            e.matched = matched;
        }
    }

    fn set_section_matched(&mut self, section: SectionId, matched: bool) {
        if let Some(s) = self.sections.iter_mut().find(|s| s.id == section) {
            s.matched = matched;
        }
    }

    fn set_kind_visible(&mut self, kind: ViewMode, visible: bool) {
        match kind {
            ViewMode::Grid => self.grid_visible = visible,
            ViewMode::Table => self.table_visible = visible,
        }
    }

    fn set_toggle_pressed(&mut self, kind: ViewMode, pressed: bool) {
        match kind {
            ViewMode::Grid => self.grid_pressed = pressed,
            ViewMode::Table => self.table_pressed = pressed,
        }
    }

    fn show_summary(&mut self, panel: SummaryPanel) {
        self.ops.push(SurfaceOp::ShowSummary(panel.count()));
        self.summary = Some(panel);
    }

    fn clear_summary(&mut self) {
        self.ops.push(SurfaceOp::ClearSummary);
        self.summary = None;
    }

    fn input_value(&self) -> String {
        self.input_value.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input_value = value.to_string();
    }

    fn focus_input(&mut self) {
        self.ops.push(SurfaceOp::FocusInput);
    }

    fn reveal_entry(&mut self, entry: EntryId) {
        self.ops.push(SurfaceOp::RevealEntry(entry));
    }

    fn reveal_section(&mut self, section: SectionId) {
        self.ops.push(SurfaceOp::RevealSection(section));
    }

    fn reveal_summary(&mut self) {
        self.ops.push(SurfaceOp::RevealSummary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_structure() {
        let mut surface = MockSurface::new();
        let controls = surface.add_controls_section();
        let section = surface.add_section();
        let (grid, cards) = surface.add_grid(section, &["ada", "grace"]);

        assert_eq!(surface.controls_section(), Some(controls));
        assert_eq!(surface.sections().len(), 2);
        assert_eq!(surface.containers(ViewMode::Grid), vec![grid]);
        assert!(surface.containers(ViewMode::Table).is_empty());
        assert_eq!(surface.entries(grid), cards);
        assert_eq!(surface.search_text(cards[0]), "ada");
        assert!(surface.card_markup(cards[0]).is_some());
        assert!(surface.row_cells(cards[0]).is_none());
    }

    #[test]
    fn test_mock_entry_reorder() {
        let mut surface = MockSurface::new();
        let section = surface.add_section();
        let (grid, ids) = surface.add_grid(section, &["a", "b", "c"]);

        surface.apply_entry_order(grid, &[ids[2], ids[0], ids[1]]);
        assert_eq!(surface.entry_order(grid), vec![ids[2], ids[0], ids[1]]);
        assert_eq!(surface.ops, vec![SurfaceOp::EntryOrder(grid, vec![ids[2], ids[0], ids[1]])]);
    }

    #[test]
    fn test_mock_partial_order_keeps_stragglers() {
        let mut surface = MockSurface::new();
        let section = surface.add_section();
        let (grid, ids) = surface.add_grid(section, &["a", "b", "c"]);

        // Ids missing from the requested order stay behind, in place
        surface.apply_entry_order(grid, &[ids[1]]);
        assert_eq!(surface.entry_order(grid), vec![ids[1], ids[0], ids[2]]);
    }

    #[test]
    fn test_mock_table_rows() {
        let mut surface = MockSurface::new();
        let section = surface.add_section();
        let (table, rows) =
            surface.add_table(section, &[&["Grace Hopper", "Admiral", "g@navy.mil"]]);

        assert_eq!(surface.containers(ViewMode::Table), vec![table]);
        assert_eq!(
            surface.row_cells(rows[0]),
            Some(vec![
                "Grace Hopper".to_string(),
                "Admiral".to_string(),
                "g@navy.mil".to_string()
            ])
        );
        assert_eq!(surface.search_text(rows[0]), "Grace Hopper Admiral g@navy.mil");
    }

    #[test]
    fn test_mock_unknown_ids_are_ignored() {
        let mut surface = MockSurface::new();
        assert_eq!(surface.search_text(EntryId(99)), "");
        assert!(surface.card_markup(EntryId(99)).is_none());
        surface.set_entry_matched(EntryId(99), true);
        assert!(!surface.entry_matched(EntryId(99)));
    }
}

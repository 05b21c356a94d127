//! In-memory page tree
//!
//! [`PageTree`] is the concrete render surface the application runs
//! against: it is built from a roster [`Directory`], with one section
//! per department and a controls section pinned first, and the
//! terminal frontend draws whatever state the tree currently holds.
//! All structural mutation goes through the [`RenderSurface`] trait.

use crate::roster::{Directory, Layout, Person};
use crate::search::summary::escape_markup;
use crate::surface::{
    ContainerId, EntryId, RenderSurface, SectionId, SummaryPanel, ViewMode,
};

/// A scroll target requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reveal {
    Entry(EntryId),
    Section(SectionId),
    Summary,
}

#[derive(Debug)]
struct Entry {
    id: EntryId,
    matched: bool,
    person: Person,
}

impl Entry {
    fn card_markup(&self) -> String {
        let p = &self.person;
        let mut markup = format!(
            "<article class=\"card\"><h4>{} <span class=\"position\">{}</span></h4>",
            escape_markup(&p.name),
            escape_markup(&p.position)
        );
        if !p.email.is_empty() {
            let email = escape_markup(&p.email);
            markup.push_str(&format!(
                "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>"
            ));
        }
        if !p.location.is_empty() {
            markup.push_str(&format!(
                "<p><strong>Location:</strong> {}</p>",
                escape_markup(&p.location)
            ));
        }
        if !p.corr_code.is_empty() {
            markup.push_str(&format!(
                "<p><strong>Corr. Code:</strong> {}</p>",
                escape_markup(&p.corr_code)
            ));
        }
        markup.push_str("</article>");
        markup
    }

    fn row_cells(&self) -> Vec<String> {
        let p = &self.person;
        vec![
            p.name.clone(),
            p.position.clone(),
            p.email.clone(),
            p.location.clone(),
            p.corr_code.clone(),
        ]
    }
}

#[derive(Debug)]
struct Container {
    id: ContainerId,
    kind: ViewMode,
    section: SectionId,
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Section {
    id: SectionId,
    title: String,
    matched: bool,
    /// Index into the container list, `None` for the controls section
    container: Option<usize>,
}

/// The application's render tree, one section per roster department
#[derive(Debug)]
pub struct PageTree {
    title: Option<String>,
    sections: Vec<Section>,
    containers: Vec<Container>,
    controls: Option<SectionId>,
    input_value: String,
    input_focused: bool,
    summary: Option<SummaryPanel>,
    grid_visible: bool,
    table_visible: bool,
    grid_pressed: bool,
    table_pressed: bool,
    scroll_target: Option<Reveal>,
}

impl PageTree {
    /// Build a page tree with the controls section included
    #[must_use]
    pub fn build(directory: &Directory) -> Self {
        Self::build_with(directory, true)
    }

    /// Build a page tree, optionally without the controls section
    #[must_use]
    pub fn build_with(directory: &Directory, include_controls: bool) -> Self {
        let mut sections = Vec::new();
        let mut containers = Vec::new();
        let mut next_section = 0u32;
        let mut next_entry = 0u32;
        let mut controls = None;

        if include_controls {
            let id = SectionId(next_section);
            next_section += 1;
            sections.push(Section {
                id,
                title: "Controls".to_string(),
                matched: false,
                container: None,
            });
            controls = Some(id);
        }

        for department in &directory.departments {
            let section_id = SectionId(next_section);
            next_section += 1;

            let kind = match department.layout {
                Layout::Grid => ViewMode::Grid,
                Layout::Table => ViewMode::Table,
            };
            let entries = department
                .staff
                .iter()
                .map(|person| {
                    let id = EntryId(next_entry);
                    next_entry += 1;
                    Entry {
                        id,
                        matched: false,
                        person: person.clone(),
                    }
                })
                .collect();

            let container_index = containers.len();
            containers.push(Container {
                id: ContainerId(u32::try_from(container_index).unwrap_or(u32::MAX)),
                kind,
                section: section_id,
                entries,
            });
            sections.push(Section {
                id: section_id,
                title: department.name.clone(),
                matched: false,
                container: Some(container_index),
            });
        }

        Self {
            title: directory.title.clone(),
            sections,
            containers,
            controls,
            input_value: String::new(),
            input_focused: true,
            summary: None,
            grid_visible: true,
            table_visible: true,
            grid_pressed: false,
            table_pressed: false,
            scroll_target: None,
        }
    }

    /// The directory's display title, if any
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title of a section
    #[must_use]
    pub fn section_title(&self, section: SectionId) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .map(|s| s.title.as_str())
    }

    /// The person behind an entry
    #[must_use]
    pub fn entry_person(&self, entry: EntryId) -> Option<&Person> {
        self.find_entry(entry).map(|e| &e.person)
    }

    /// Whether an entry currently carries the matched flag
    #[must_use]
    pub fn entry_matched(&self, entry: EntryId) -> bool {
        self.find_entry(entry).is_some_and(|e| e.matched)
    }

    /// Whether a section currently has a matched entry
    #[must_use]
    pub fn section_matched(&self, section: SectionId) -> bool {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .is_some_and(|s| s.matched)
    }

    /// The summary panel, when visible
    #[must_use]
    pub const fn summary(&self) -> Option<&SummaryPanel> {
        self.summary.as_ref()
    }

    /// The kind of container a section renders, `None` for controls
    #[must_use]
    pub fn section_kind(&self, section: SectionId) -> Option<ViewMode> {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .and_then(|s| s.container)
            .map(|i| self.containers[i].kind)
    }

    /// The container belonging to a section
    #[must_use]
    pub fn section_container(&self, section: SectionId) -> Option<ContainerId> {
        self.sections
            .iter()
            .find(|s| s.id == section)
            .and_then(|s| s.container)
            .map(|i| self.containers[i].id)
    }

    /// Whether containers of a kind are currently shown
    #[must_use]
    pub const fn kind_visible(&self, kind: ViewMode) -> bool {
        match kind {
            ViewMode::Grid => self.grid_visible,
            ViewMode::Table => self.table_visible,
        }
    }

    /// Whether a view toggle is in its pressed state
    #[must_use]
    pub const fn toggle_pressed(&self, kind: ViewMode) -> bool {
        match kind {
            ViewMode::Grid => self.grid_pressed,
            ViewMode::Table => self.table_pressed,
        }
    }

    /// Whether the last focus request went to the search input
    #[must_use]
    pub const fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Take the most recent scroll target, clearing it
    ///
    /// The controller may request several reveals during one pipeline
    /// run; only the last one survives as the scroll target.
    pub const fn take_scroll_target(&mut self) -> Option<Reveal> {
        self.scroll_target.take()
    }

    fn find_entry(&self, entry: EntryId) -> Option<&Entry> {
        self.containers
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.id == entry)
    }

    fn find_entry_mut(&mut self, entry: EntryId) -> Option<&mut Entry> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.entries.iter_mut())
            .find(|e| e.id == entry)
    }
}

impl RenderSurface for PageTree {
    fn has_search_input(&self) -> bool {
        true
    }

    fn has_view_toggles(&self) -> bool {
        true
    }

    fn has_main_region(&self) -> bool {
        !self.sections.is_empty()
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
        self.find_entry(entry)
            .map(|e| e.person.search_text())
            .unwrap_or_default()
    }

    fn card_markup(&self, entry: EntryId) -> Option<String> {
        let entry = self.find_entry(entry)?;
        let container = self.containers.iter().find(|c| {
            c.entries.iter().any(|e| e.id == entry.id)
        })?;
        (container.kind == ViewMode::Grid).then(|| entry.card_markup())
    }

    fn row_cells(&self, entry: EntryId) -> Option<Vec<String>> {
        let entry = self.find_entry(entry)?;
        let container = self.containers.iter().find(|c| {
            c.entries.iter().any(|e| e.id == entry.id)
        })?;
        (container.kind == ViewMode::Table).then(|| entry.row_cells())
    }

    fn apply_entry_order(&mut self, container: ContainerId, order: &[EntryId]) {
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
        self.summary = Some(panel);
    }

    fn clear_summary(&mut self) {
        self.summary = None;
    }

    fn input_value(&self) -> String {
        self.input_value.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input_value = value.to_string();
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn reveal_entry(&mut self, entry: EntryId) {
        self.scroll_target = Some(Reveal::Entry(entry));
    }

    fn reveal_section(&mut self, section: SectionId) {
        self.scroll_target = Some(Reveal::Section(section));
    }

    fn reveal_summary(&mut self) {
        self.scroll_target = Some(Reveal::Summary);
    }
}

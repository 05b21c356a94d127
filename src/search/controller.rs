//! The directory search controller
//!
//! One controller instance owns the whole widget lifecycle: view-mode
//! toggling, debounced input handling, and the filter pipeline that
//! reorders entries and sections and rebuilds the results summary.
//! It holds no references into the page; all reads and mutations go
//! through a [`RenderSurface`], and the only state it owns is the
//! one-time order snapshots, the query, and the debounce handle.

use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use super::filter;
use super::query::{self, MIN_QUERY_CHARS, QueryState};
use super::sections;
use super::summary;
use crate::surface::{ContainerId, EntryId, RenderSurface, SectionId, SummaryCard, ViewMode};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

const KINDS: [ViewMode; 2] = [ViewMode::Grid, ViewMode::Table];

/// Tunables for a controller instance
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Delay before a paused query is applied
    pub debounce: Duration,
    /// Minimum query length (in characters) before filtering kicks in
    pub min_query_chars: usize,
    /// Presentation shown on startup
    pub initial_mode: ViewMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_chars: MIN_QUERY_CHARS,
            initial_mode: ViewMode::Grid,
        }
    }
}

/// Special keys the search input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Enter: run the pipeline immediately, bypassing the debounce
    Submit,
    /// Escape: clear the input and run with an empty query
    Clear,
}

/// Controller for the staff-directory search widget
pub struct DirectoryController {
    options: SearchOptions,
    mode: ViewMode,
    query: QueryState,
    debouncer: Debouncer,
    /// Original child order per container, captured once at attach
    original_entries: HashMap<ContainerId, Vec<EntryId>>,
    /// Original top-level section order, captured once at attach
    original_sections: Vec<SectionId>,
    controls: Option<SectionId>,
}

impl DirectoryController {
    /// Attach a controller to a surface
    ///
    /// Captures the order snapshots, applies the initial view mode,
    /// and hides the summary panel. Returns `None` when the surface
    /// lacks any of the required root elements (search input, view
    /// toggles, main region); the page then simply stays inert.
    pub fn attach<S: RenderSurface>(surface: &mut S, options: SearchOptions) -> Option<Self> {
        if !surface.has_search_input() || !surface.has_view_toggles() || !surface.has_main_region()
        {
            return None;
        }

        let mut original_entries = HashMap::new();
        for kind in KINDS {
            for container in surface.containers(kind) {
                original_entries.insert(container, surface.entries(container));
            }
        }

        let controller = Self {
            options,
            mode: options.initial_mode,
            query: QueryState::default(),
            debouncer: Debouncer::new(options.debounce),
            original_entries,
            original_sections: surface.sections(),
            controls: surface.controls_section(),
        };
        controller.apply_mode(surface);
        surface.clear_summary();
        Some(controller)
    }

    /// The currently selected view mode
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The current normalized query
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Deadline of a pending debounced run, for event-loop poll sizing
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Select a view mode
    ///
    /// Idempotent and mutually exclusive: containers of the selected
    /// kind become visible, the other kind is hidden, and both toggle
    /// controls update their pressed state.
    pub fn set_mode<S: RenderSurface>(&mut self, surface: &mut S, mode: ViewMode) {
        self.mode = mode;
        self.apply_mode(surface);
    }

    fn apply_mode<S: RenderSurface>(&self, surface: &mut S) {
        let other = self.mode.other();
        surface.set_kind_visible(self.mode, true);
        surface.set_kind_visible(other, false);
        surface.set_toggle_pressed(self.mode, true);
        surface.set_toggle_pressed(other, false);
    }

    /// React to an input event: re-arm the debounce with the value
    ///
    /// Any previously armed run is cancelled by the re-arm, so only
    /// the newest value can ever fire.
    pub fn handle_input(&mut self, value: &str, now: Instant) {
        self.debouncer.schedule(value, now);
    }

    /// React to a special key on the search input
    pub fn handle_key<S: RenderSurface>(&mut self, surface: &mut S, key: InputKey) {
        self.debouncer.cancel();
        match key {
            InputKey::Submit => {
                let value = surface.input_value();
                self.run_filter(surface, &value);
            }
            InputKey::Clear => {
                surface.set_input_value("");
                self.run_filter(surface, "");
            }
        }
    }

    /// Fire the debounced run if its deadline has passed
    ///
    /// Returns true when a run was executed.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S, now: Instant) -> bool {
        if let Some(value) = self.debouncer.take_due(now) {
            self.run_filter(surface, &value);
            true
        } else {
            false
        }
    }

    /// Run the full filter pipeline with the given raw input
    ///
    /// Normalizes, applies the minimum-length gate, filters every
    /// container of both kinds, reorders sections, and rebuilds or
    /// hides the summary panel.
    pub fn run_filter<S: RenderSurface>(&mut self, surface: &mut S, raw: &str) {
        self.query.set_raw(raw);
        let effective = self
            .query
            .effective(self.options.min_query_chars)
            .map(str::to_owned);
        match effective {
            Some(q) => self.apply_query(surface, &q),
            None => self.restore_all(surface),
        }
    }

    /// Empty/short query: exact restoration of the captured state
    fn restore_all<S: RenderSurface>(&self, surface: &mut S) {
        for kind in KINDS {
            for container in surface.containers(kind) {
                let original = self.original_order(surface, container);
                for entry in &original {
                    surface.set_entry_matched(*entry, false);
                }
                surface.apply_entry_order(container, &original);
            }
        }

        let order =
            sections::section_order(&self.original_sections, self.controls, &HashSet::new(), false);
        for section in &order {
            surface.set_section_matched(*section, false);
        }
        surface.apply_section_order(&order);

        surface.clear_summary();
        surface.focus_input();
    }

    /// Active query: partition, reorder, summarize
    fn apply_query<S: RenderSurface>(&self, surface: &mut S, q: &str) {
        let mut matched_sections: HashSet<SectionId> = HashSet::new();
        let mut cards: Vec<SummaryCard> = Vec::new();

        // Grid containers first, then tables, so the panel lists
        // cloned cards before synthesized ones
        for kind in KINDS {
            for container in surface.containers(kind) {
                let original = self.original_order(surface, container);
                let keyed: Vec<(EntryId, String)> = original
                    .iter()
                    .map(|&entry| (entry, query::normalize(&surface.search_text(entry))))
                    .collect();
                let outcome = filter::partition_entries(&keyed, q);

                let matched: HashSet<EntryId> = outcome.matched.iter().copied().collect();
                for entry in &outcome.order {
                    surface.set_entry_matched(*entry, matched.contains(entry));
                }
                surface.apply_entry_order(container, &outcome.order);

                if let Some(&first) = outcome.matched.first() {
                    surface.reveal_entry(first);
                }
                if outcome.has_matches()
                    && let Some(section) = surface.section_of(container)
                {
                    matched_sections.insert(section);
                }

                for &entry in &outcome.matched {
                    match kind {
                        ViewMode::Grid => {
                            if let Some(markup) = surface.card_markup(entry) {
                                cards.push(summary::cloned_card(&markup));
                            }
                        }
                        ViewMode::Table => {
                            if let Some(cells) = surface.row_cells(entry) {
                                cards.push(summary::card_from_cells(&cells));
                            }
                        }
                    }
                }
            }
        }

        if let Some(controls) = self.controls {
            matched_sections.remove(&controls);
        }

        let order =
            sections::section_order(&self.original_sections, self.controls, &matched_sections, true);
        for section in &order {
            surface.set_section_matched(*section, matched_sections.contains(section));
        }
        surface.apply_section_order(&order);

        match summary::build_panel(cards) {
            Some(panel) => {
                surface.show_summary(panel);
                surface.focus_input();
                surface.reveal_summary();
            }
            None => surface.clear_summary(),
        }

        // Last reveal wins: land on the first matched section
        if let Some(&first) = order.iter().find(|s| matched_sections.contains(s)) {
            surface.reveal_section(first);
        }
    }

    fn original_order<S: RenderSurface>(&self, surface: &S, container: ContainerId) -> Vec<EntryId> {
        self.original_entries
            .get(&container)
            .cloned()
            .unwrap_or_else(|| surface.entries(container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MockSurface, SurfaceOp};

    fn attach(surface: &mut MockSurface) -> DirectoryController {
        DirectoryController::attach(surface, SearchOptions::default())
            .expect("surface has all required roots")
    }

    /// Controls section, a grid section with Ada/Grace/Alan, and a
    /// table section with two rows
    fn sample_surface() -> (MockSurface, Vec<EntryId>, Vec<EntryId>) {
        let mut surface = MockSurface::new();
        surface.add_controls_section();
        let grid_section = surface.add_section();
        let (_, cards) = surface.add_grid(
            grid_section,
            &[
                "Ada Lovelace, Engineer",
                "Grace Hopper, Admiral",
                "Alan Turing, Engineer",
            ],
        );
        let table_section = surface.add_section();
        let (_, rows) = surface.add_table(
            table_section,
            &[
                &["Jean Bartik", "Programmer", "jean@eniac.org", "Philadelphia", "JB-11"],
                &["Grace Murray", "Analyst", "gm@example.org", "Boston", "GM-07"],
            ],
        );
        (surface, cards, rows)
    }

    #[test]
    fn test_attach_declines_without_required_roots() {
        let mut no_input = MockSurface::new().without_input();
        assert!(DirectoryController::attach(&mut no_input, SearchOptions::default()).is_none());

        let mut no_toggles = MockSurface::new().without_toggles();
        assert!(DirectoryController::attach(&mut no_toggles, SearchOptions::default()).is_none());

        let mut no_main = MockSurface::new().without_main();
        assert!(DirectoryController::attach(&mut no_main, SearchOptions::default()).is_none());
    }

    #[test]
    fn test_attach_applies_initial_mode_and_hides_summary() {
        let (mut surface, _, _) = sample_surface();
        let controller = attach(&mut surface);

        assert_eq!(controller.mode(), ViewMode::Grid);
        assert!(surface.kind_visible(ViewMode::Grid));
        assert!(!surface.kind_visible(ViewMode::Table));
        assert!(surface.toggle_pressed(ViewMode::Grid));
        assert!(!surface.toggle_pressed(ViewMode::Table));
        assert!(surface.summary().is_none());
    }

    #[test]
    fn test_set_mode_is_mutually_exclusive_and_idempotent() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);

        controller.set_mode(&mut surface, ViewMode::Table);
        assert!(!surface.kind_visible(ViewMode::Grid));
        assert!(surface.kind_visible(ViewMode::Table));
        assert!(surface.toggle_pressed(ViewMode::Table));
        assert!(!surface.toggle_pressed(ViewMode::Grid));

        // Repeating the same mode changes nothing
        controller.set_mode(&mut surface, ViewMode::Table);
        assert!(surface.kind_visible(ViewMode::Table));
        assert!(!surface.kind_visible(ViewMode::Grid));
    }

    #[test]
    fn test_query_moves_matches_first_and_flags_them() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);

        controller.run_filter(&mut surface, "grace");

        let grid = surface.containers(ViewMode::Grid)[0];
        assert_eq!(
            surface.entry_order(grid),
            vec![cards[1], cards[0], cards[2]]
        );
        assert!(surface.entry_matched(cards[1]));
        assert!(!surface.entry_matched(cards[0]));
        assert!(!surface.entry_matched(cards[2]));
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let (mut surface, cards, rows) = sample_surface();
        let mut controller = attach(&mut surface);

        controller.run_filter(&mut surface, "  GRACE ");

        // Matches in both the grid card and the table row
        assert!(surface.entry_matched(cards[1]));
        assert!(surface.entry_matched(rows[1]));
        assert!(!surface.entry_matched(rows[0]));
    }

    #[test]
    fn test_clear_restores_exact_original_order() {
        let (mut surface, cards, rows) = sample_surface();
        let mut controller = attach(&mut surface);
        let grid = surface.containers(ViewMode::Grid)[0];
        let table = surface.containers(ViewMode::Table)[0];
        let original_sections = surface.section_order();

        controller.run_filter(&mut surface, "engineer");
        assert_ne!(surface.entry_order(grid), cards);

        controller.run_filter(&mut surface, "");
        assert_eq!(surface.entry_order(grid), cards);
        assert_eq!(surface.entry_order(table), rows);
        assert_eq!(surface.section_order(), original_sections);
        assert!(!surface.entry_matched(cards[0]));
        assert!(surface.summary().is_none());
    }

    #[test]
    fn test_short_query_behaves_like_empty() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let grid = surface.containers(ViewMode::Grid)[0];

        controller.run_filter(&mut surface, "engineer");
        controller.run_filter(&mut surface, "en");

        assert_eq!(surface.entry_order(grid), cards);
        assert!(!surface.entry_matched(cards[0]));
        assert!(surface.summary().is_none());
        // The gate does not clear the input field itself
        assert_eq!(surface.current_input(), "");
    }

    #[test]
    fn test_sections_reorder_with_controls_pinned_first() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let original = surface.section_order();
        let controls = original[0];
        let grid_section = original[1];
        let table_section = original[2];

        // "jean" only matches the table section
        controller.run_filter(&mut surface, "jean");
        assert_eq!(
            surface.section_order(),
            vec![controls, table_section, grid_section]
        );
        assert!(surface.section_matched(table_section));
        assert!(!surface.section_matched(grid_section));
        assert!(!surface.section_matched(controls));
    }

    #[test]
    fn test_summary_counts_grid_and_table_matches() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);

        controller.run_filter(&mut surface, "grace");

        let panel = surface.summary().expect("panel visible");
        assert_eq!(panel.heading, "Search results - showing 2 item(s)");
        // Cloned grid card first, synthesized table card second
        assert!(panel.cards[0].markup.contains("Grace Hopper"));
        assert!(panel.cards[1].markup.contains("mailto:gm@example.org"));
    }

    #[test]
    fn test_summary_hidden_on_zero_matches_without_focus() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);

        surface.ops.clear();
        controller.run_filter(&mut surface, "nobody-here");

        assert!(surface.summary().is_none());
        assert!(surface.ops.contains(&SurfaceOp::ClearSummary));
        assert!(!surface.ops.contains(&SurfaceOp::FocusInput));
    }

    #[test]
    fn test_empty_query_refocuses_input() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);

        surface.ops.clear();
        controller.run_filter(&mut surface, "");
        assert!(surface.ops.contains(&SurfaceOp::FocusInput));
    }

    #[test]
    fn test_reveal_lands_on_first_matched_section() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let grid_section = surface.section_order()[1];

        surface.ops.clear();
        controller.run_filter(&mut surface, "ada");

        assert!(surface.ops.contains(&SurfaceOp::RevealEntry(cards[0])));
        assert_eq!(surface.ops.last(), Some(&SurfaceOp::RevealSection(grid_section)));
    }

    #[test]
    fn test_rerunning_same_query_is_idempotent() {
        let (mut surface, _, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let grid = surface.containers(ViewMode::Grid)[0];

        controller.run_filter(&mut surface, "engineer");
        let first_order = surface.entry_order(grid);
        controller.run_filter(&mut surface, "engineer");
        assert_eq!(surface.entry_order(grid), first_order);
    }

    #[test]
    fn test_enter_bypasses_debounce() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);

        surface.set_input_value("grace");
        controller.handle_input("grace", Instant::now());
        assert!(controller.next_deadline().is_some());

        controller.handle_key(&mut surface, InputKey::Submit);
        assert!(controller.next_deadline().is_none());
        assert!(surface.entry_matched(cards[1]));
    }

    #[test]
    fn test_escape_clears_input_and_restores_synchronously() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let grid = surface.containers(ViewMode::Grid)[0];

        surface.set_input_value("engineer");
        controller.handle_key(&mut surface, InputKey::Submit);
        assert!(surface.summary().is_some());

        surface.set_input_value("engineer");
        controller.handle_input("engineer", Instant::now());
        controller.handle_key(&mut surface, InputKey::Clear);

        assert_eq!(surface.current_input(), "");
        assert_eq!(surface.entry_order(grid), cards);
        assert!(surface.summary().is_none());
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn test_debounced_run_fires_via_tick() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let t0 = Instant::now();

        controller.handle_input("grace", t0);
        assert!(!controller.tick(&mut surface, t0 + Duration::from_millis(300)));
        assert!(!surface.entry_matched(cards[1]));

        assert!(controller.tick(&mut surface, t0 + Duration::from_millis(600)));
        assert!(surface.entry_matched(cards[1]));
    }

    #[test]
    fn test_keystroke_rearms_debounce() {
        let (mut surface, cards, _) = sample_surface();
        let mut controller = attach(&mut surface);
        let t0 = Instant::now();

        controller.handle_input("gra", t0);
        controller.handle_input("grace", t0 + Duration::from_millis(500));

        // The original deadline passes without firing the stale value
        assert!(!controller.tick(&mut surface, t0 + Duration::from_millis(600)));
        assert!(controller.tick(&mut surface, t0 + Duration::from_millis(1100)));
        assert!(surface.entry_matched(cards[1]));
    }

    #[test]
    fn test_custom_min_chars() {
        let (mut surface, cards, _) = sample_surface();
        let options = SearchOptions {
            min_query_chars: 5,
            ..SearchOptions::default()
        };
        let mut controller =
            DirectoryController::attach(&mut surface, options).expect("attach");

        controller.run_filter(&mut surface, "grac");
        assert!(!surface.entry_matched(cards[1]));

        controller.run_filter(&mut surface, "grace");
        assert!(surface.entry_matched(cards[1]));
    }
}

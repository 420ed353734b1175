//! Picker core: the filter/select state machine behind the list widget.
//!
//! One owned value composes the roster, the search controller, the
//! selection store and the cached filtered view. Renderer callbacks map to
//! [`PickerEvent`] values consumed by a single transition function, so the
//! whole widget can be driven and asserted on without a rendering harness.

use std::time::Instant;

use crate::filter;
use crate::search::SearchController;
use crate::selection::SelectionStore;
use crate::{Item, PickerConfig};

/// External events feeding the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The search input changed; carries the full replacement text
    TextChanged(String),
    /// The clear control was pressed
    ClearPressed,
    /// A row was tapped, toggling its selection
    ItemTapped(u64),
    /// Event-loop tick; fires an elapsed debounced commit
    Tick,
}

/// The composed widget state. Owned by exactly one widget instance;
/// dropping it cancels the pending debounced commit by construction.
pub struct Picker {
    config: PickerConfig,
    items: Vec<Item>,
    search: SearchController,
    selection: SelectionStore,
    /// Indices into `items` for the current committed term
    filtered: Vec<usize>,
    /// How many times the filter has recomputed. The filtered view is
    /// derived state: this moves only when the committed term or the
    /// roster changes, never on keystrokes or selection toggles.
    filter_runs: u64,
}

impl Picker {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_config(items, PickerConfig::default())
    }

    pub fn with_config(items: Vec<Item>, config: PickerConfig) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            search: SearchController::new(config.debounce_delay),
            selection: SelectionStore::new(),
            config,
            items,
            filtered,
            filter_runs: 0,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Apply one event at `now`. Returns true when the rendered view
    /// (visible rows, selection marks or input text) changed.
    pub fn handle(&mut self, event: PickerEvent, now: Instant) -> bool {
        match event {
            PickerEvent::TextChanged(text) => {
                if text == self.search.raw_text() {
                    return false;
                }
                self.search.set_raw_text(text, now);
                true
            }
            PickerEvent::ClearPressed => {
                let had_text = !self.search.raw_text().is_empty();
                if self.search.clear() {
                    self.refilter();
                    return true;
                }
                had_text
            }
            PickerEvent::ItemTapped(id) => {
                self.selection.toggle(id);
                true
            }
            PickerEvent::Tick => {
                if self.search.poll(now) {
                    self.refilter();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Replace the whole roster. The selection set is deliberately left
    /// untouched: ids no longer present stay selected but unrenderable
    /// (they still count toward [`Picker::selected_count`]). There is no
    /// auto-prune.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter::filter_indices(&self.items, self.search.committed_term());
        self.filter_runs += 1;
    }

    // --- Render-cycle accessors ---

    /// The filtered roster, in original order
    pub fn visible_items(&self) -> Vec<&Item> {
        self.filtered.iter().map(|&idx| &self.items[idx]).collect()
    }

    /// The visible item at a filtered-view position
    pub fn visible_item(&self, pos: usize) -> Option<&Item> {
        self.filtered.get(pos).map(|&idx| &self.items[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// Selection-membership predicate for row rendering
    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected items in roster order. Stale ids (selected, then removed
    /// by a roster replacement) resolve to nothing and are skipped here.
    pub fn selected_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.selection.is_selected(item.id))
            .collect()
    }

    pub fn raw_text(&self) -> &str {
        self.search.raw_text()
    }

    pub fn committed_term(&self) -> &str {
        self.search.committed_term()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.search.has_pending_commit()
    }

    /// Recompute counter for the filtered view
    pub fn filter_runs(&self) -> u64 {
        self.filter_runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_roster;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn names(picker: &Picker) -> Vec<&str> {
        picker
            .visible_items()
            .iter()
            .map(|i| i.name.as_str())
            .collect()
    }

    #[test]
    fn typing_filters_only_after_the_debounce_window() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        picker.handle(PickerEvent::TextChanged("ra".to_string()), at(base, 0));
        assert_eq!(names(&picker), vec!["Rohan", "Raj", "Gautam"]);
        assert_eq!(picker.raw_text(), "ra");

        assert!(!picker.handle(PickerEvent::Tick, at(base, 299)));
        assert!(picker.handle(PickerEvent::Tick, at(base, 300)));
        assert_eq!(names(&picker), vec!["Rohan", "Raj"]);
    }

    #[test]
    fn selection_survives_filtering() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        picker.handle(PickerEvent::ItemTapped(1), at(base, 0));
        assert!(picker.is_selected(1));

        // Filter Rohan (id 1) out of view.
        picker.handle(PickerEvent::TextChanged("gautam".to_string()), at(base, 0));
        picker.handle(PickerEvent::Tick, at(base, 300));
        assert_eq!(names(&picker), vec!["Gautam"]);
        assert!(picker.is_selected(1));

        picker.handle(PickerEvent::ClearPressed, at(base, 400));
        assert_eq!(names(&picker), vec!["Rohan", "Raj", "Gautam"]);
        assert!(picker.is_selected(1));
        assert!(!picker.is_selected(2));
    }

    #[test]
    fn clear_takes_effect_synchronously() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        picker.handle(PickerEvent::TextChanged("raj".to_string()), at(base, 0));
        picker.handle(PickerEvent::Tick, at(base, 300));
        assert_eq!(picker.visible_len(), 1);

        // Another keystroke is in flight when clear lands.
        picker.handle(PickerEvent::TextChanged("rajx".to_string()), at(base, 400));
        picker.handle(PickerEvent::ClearPressed, at(base, 450));
        assert_eq!(picker.raw_text(), "");
        assert_eq!(picker.committed_term(), "");
        assert_eq!(picker.visible_len(), 3);

        // The in-flight commit never fires.
        assert!(!picker.handle(PickerEvent::Tick, at(base, 10_000)));
        assert_eq!(picker.visible_len(), 3);
    }

    #[test]
    fn filter_recomputes_only_when_inputs_change() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());
        assert_eq!(picker.filter_runs(), 0);

        // Keystrokes alone don't refilter.
        picker.handle(PickerEvent::TextChanged("r".to_string()), at(base, 0));
        picker.handle(PickerEvent::TextChanged("ra".to_string()), at(base, 50));
        assert_eq!(picker.filter_runs(), 0);

        // Neither do selection toggles or idle ticks.
        picker.handle(PickerEvent::ItemTapped(2), at(base, 60));
        assert_eq!(picker.filter_runs(), 0);

        picker.handle(PickerEvent::Tick, at(base, 350));
        assert_eq!(picker.filter_runs(), 1);

        picker.handle(PickerEvent::Tick, at(base, 400));
        picker.handle(PickerEvent::ItemTapped(2), at(base, 410));
        assert_eq!(picker.filter_runs(), 1);

        // Committing the identical term again is not a change.
        picker.handle(PickerEvent::TextChanged("ra".to_string()), at(base, 500));
        picker.handle(PickerEvent::Tick, at(base, 800));
        assert_eq!(picker.filter_runs(), 1);

        picker.handle(PickerEvent::ClearPressed, at(base, 900));
        assert_eq!(picker.filter_runs(), 2);
    }

    #[test]
    fn tapping_an_unknown_id_is_tolerated() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        picker.handle(PickerEvent::ItemTapped(999), at(base, 0));
        assert!(picker.is_selected(999));
        assert_eq!(picker.selected_count(), 1);
        // It never resolves to a visible row.
        assert!(picker.selected_items().is_empty());
    }

    #[test]
    fn replace_items_keeps_stale_selections_unpruned() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        picker.handle(PickerEvent::ItemTapped(1), at(base, 0));
        picker.handle(PickerEvent::ItemTapped(3), at(base, 0));

        picker.replace_items(vec![Item::new(3, "Gautam"), Item::new(4, "Meera")]);
        assert_eq!(names(&picker), vec!["Gautam", "Meera"]);

        // Id 1 is gone from the roster but stays selected.
        assert!(picker.is_selected(1));
        assert_eq!(picker.selected_count(), 2);
        assert_eq!(
            picker
                .selected_items()
                .iter()
                .map(|i| i.id)
                .collect::<Vec<_>>(),
            vec![3]
        );
    }

    #[test]
    fn end_to_end_scenario() {
        let base = Instant::now();
        let mut picker = Picker::new(demo_roster());

        // Type "Rohan" -> only Rohan visible after the commit.
        picker.handle(PickerEvent::TextChanged("Rohan".to_string()), at(base, 0));
        picker.handle(PickerEvent::Tick, at(base, 300));
        assert_eq!(names(&picker), vec!["Rohan"]);

        // Tap Rohan -> selected.
        let id = picker.visible_item(0).map(|i| i.id).unwrap();
        picker.handle(PickerEvent::ItemTapped(id), at(base, 350));
        assert!(picker.is_selected(id));

        // Clear -> all three back, Rohan still selected, others not.
        picker.handle(PickerEvent::ClearPressed, at(base, 400));
        assert_eq!(names(&picker), vec!["Rohan", "Raj", "Gautam"]);
        assert!(picker.is_selected(1));
        assert!(!picker.is_selected(2));
        assert!(!picker.is_selected(3));
    }
}

//! Dropdown selector widget.
//!
//! The widget owns only transient view state: whether it is open, the draft
//! text used to create new items, and the outside-press subscription held
//! while open. The candidate list and the current selection belong to the
//! host; every selection decision is reported back as a [`SelectionChange`]
//! and the host is the only place that applies it.
//!
//! Selection is single-valued. Selecting the selected item clears the
//! selection; selecting any other item replaces it.

mod draft;

pub use draft::DraftBuffer;

use crate::events::Action;
use crate::item::{CREATED_ICON, IdGenerator, Item, is_selected};
use crate::pointer::{PointerMonitor, Subscription};
use crate::tui::interaction::ClickRegion;

/// Open/closed state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// A selection update reported to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    /// The full new selection, always zero or one item.
    pub selection: Vec<Item>,
    /// An item created by the widget that the host must append to its list.
    pub created: Option<Item>,
}

impl SelectionChange {
    fn cleared() -> Self {
        Self {
            selection: vec![],
            created: None,
        }
    }

    fn single(item: Item) -> Self {
        Self {
            selection: vec![item],
            created: None,
        }
    }

    fn created(item: Item) -> Self {
        Self {
            selection: vec![item.clone()],
            created: Some(item),
        }
    }
}

#[derive(Debug)]
pub struct Dropdown {
    visibility: Visibility,
    draft: DraftBuffer,
    ids: IdGenerator,
    bounds: ClickRegion,
    outside_press: Option<Subscription>,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Closed,
            draft: DraftBuffer::new(),
            ids: IdGenerator::new(),
            bounds: ClickRegion::default(),
            outside_press: None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn draft(&self) -> &DraftBuffer {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftBuffer {
        &mut self.draft
    }

    /// Flip between open and closed.
    pub fn toggle_trigger(&mut self, monitor: &PointerMonitor) {
        match self.visibility {
            Visibility::Closed => self.open(monitor),
            Visibility::Open => self.close(),
        }
    }

    /// Open the list and start watching for presses outside the widget.
    pub fn open(&mut self, monitor: &PointerMonitor) {
        if self.is_open() {
            return;
        }
        self.visibility = Visibility::Open;
        self.outside_press = Some(monitor.subscribe(self.bounds, Action::DismissDropdown));
    }

    /// Close the list and detach the outside-press listener.
    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
        self.outside_press = None;
    }

    /// Record the region the widget occupies on screen.
    ///
    /// Called on every render; presses inside this region never dismiss.
    pub fn set_bounds(&mut self, bounds: ClickRegion) {
        self.bounds = bounds;
        if let Some(sub) = &self.outside_press {
            sub.set_bounds(bounds);
        }
    }

    #[allow(dead_code)]
    pub fn bounds(&self) -> ClickRegion {
        self.bounds
    }

    /// Toggle `item` against the host's current selection.
    pub fn select_item(&self, item: &Item, selected: &[Item]) -> SelectionChange {
        if is_selected(item, selected) {
            SelectionChange::cleared()
        } else {
            SelectionChange::single(item.clone())
        }
    }

    /// Replace the draft text. Local only; nothing is reported.
    pub fn update_draft_text(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Turn the draft into a new selected item.
    ///
    /// Returns `None` without touching anything when the trimmed draft is empty.
    pub fn submit_draft(&mut self) -> Option<SelectionChange> {
        let label = self.draft.committed()?.to_string();
        let item = Item::new(self.ids.next_id(), label, CREATED_ICON);
        self.draft.clear();
        Some(SelectionChange::created(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::seed_items;

    #[test]
    fn test_starts_closed() {
        let dropdown = Dropdown::new();
        assert_eq!(dropdown.visibility(), Visibility::Closed);
        assert!(dropdown.draft().is_empty());
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();

        dropdown.toggle_trigger(&monitor);
        assert!(dropdown.is_open());
        assert_eq!(monitor.active(), 1);

        dropdown.toggle_trigger(&monitor);
        assert!(!dropdown.is_open());
        assert_eq!(monitor.active(), 0);
    }

    #[test]
    fn test_open_twice_keeps_one_listener() {
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();
        dropdown.open(&monitor);
        dropdown.open(&monitor);
        assert_eq!(monitor.active(), 1);
    }

    #[test]
    fn test_outside_press_dismisses() {
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();
        dropdown.set_bounds(ClickRegion::new(2, 2, 30, 10));
        dropdown.open(&monitor);

        assert!(monitor.press(10, 5).is_empty());

        let actions = monitor.press(50, 5);
        assert!(matches!(actions.as_slice(), [Action::DismissDropdown]));
        dropdown.close();
        assert_eq!(monitor.active(), 0);
    }

    #[test]
    fn test_bounds_follow_render() {
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();
        dropdown.set_bounds(ClickRegion::new(0, 0, 20, 1));
        dropdown.open(&monitor);
        assert_eq!(monitor.press(5, 4).len(), 1);

        // The open list grows the widget downwards
        dropdown.set_bounds(ClickRegion::new(0, 0, 20, 10));
        assert!(monitor.press(5, 4).is_empty());
    }

    #[test]
    fn test_drop_releases_listener() {
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();
        dropdown.open(&monitor);
        assert_eq!(monitor.active(), 1);
        drop(dropdown);
        assert_eq!(monitor.active(), 0);
    }

    #[test]
    fn test_select_unselected_then_again() {
        let items = seed_items();
        let dropdown = Dropdown::new();

        let change = dropdown.select_item(&items[0], &[]);
        assert_eq!(change.selection, vec![items[0].clone()]);
        assert!(change.created.is_none());

        let change = dropdown.select_item(&items[0], &change.selection);
        assert!(change.selection.is_empty());
    }

    #[test]
    fn test_select_replaces_previous() {
        let items = seed_items();
        let dropdown = Dropdown::new();

        let first = dropdown.select_item(&items[0], &[]);
        let second = dropdown.select_item(&items[1], &first.selection);
        assert_eq!(second.selection, vec![items[1].clone()]);
    }

    #[test]
    fn test_select_does_not_change_visibility() {
        let items = seed_items();
        let monitor = PointerMonitor::new();
        let mut dropdown = Dropdown::new();
        dropdown.open(&monitor);

        dropdown.select_item(&items[2], &[]);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_submit_creates_selected_item() {
        let mut dropdown = Dropdown::new();
        dropdown.update_draft_text("  Foo ");

        let change = dropdown.submit_draft().expect("draft should commit");
        let created = change.created.clone().expect("item created");
        assert_eq!(created.label, "Foo");
        assert_eq!(created.icon, CREATED_ICON);
        assert!(!created.id.is_empty());
        assert_eq!(change.selection, vec![created]);
        assert!(dropdown.draft().is_empty());
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let mut dropdown = Dropdown::new();
        assert!(dropdown.submit_draft().is_none());

        dropdown.update_draft_text(" \t ");
        assert!(dropdown.submit_draft().is_none());
        assert_eq!(dropdown.draft().text(), " \t ");
    }

    #[test]
    fn test_identical_submissions_get_distinct_ids() {
        let mut dropdown = Dropdown::new();
        dropdown.update_draft_text("Same");
        let a = dropdown.submit_draft().and_then(|c| c.created).unwrap();
        dropdown.update_draft_text("Same");
        let b = dropdown.submit_draft().and_then(|c| c.created).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_icon_distinct_from_seed() {
        assert!(seed_items().iter().all(|i| i.icon != CREATED_ICON));
    }
}

//! Selectable items and id generation.

use serde::Deserialize;

/// Glyph given to every item created from typed text.
pub const CREATED_ICON: &str = "✨";

/// A selectable entry in the dropdown.
///
/// Items are immutable once created; the host owns the list they live in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Built-in candidate list used when the config file provides none.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("1", "Science", "🧬"),
        Item::new("2", "Education", "🎓"),
        Item::new("3", "Art", "🎨"),
        Item::new("4", "Sport", "⚽"),
        Item::new("5", "Games", "🎮"),
        Item::new("6", "Health", "🏥"),
    ]
}

/// Whether `item` is the current selection.
///
/// Only the first entry of `selected` counts; extra entries are ignored.
pub fn is_selected(item: &Item, selected: &[Item]) -> bool {
    selected.first().is_some_and(|s| s.id == item.id)
}

/// Time-derived id source.
///
/// Ids are milliseconds since the Unix epoch, bumped past the last id handed
/// out so that two calls in the same millisecond still differ.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id using the current wall clock.
    pub fn next_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Produce the next id as if the clock read `now_ms`.
    fn next_at(&mut self, now_ms: u64) -> String {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}

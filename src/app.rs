//! Host application state.
//!
//! The App owns the candidate list and the authoritative selection. The
//! dropdown only proposes changes; `apply_change` is the single place where
//! created items are merged into the list and the selection is replaced.

use crate::config::Config;
use crate::dropdown::{Dropdown, SelectionChange};
use crate::events::Action;
use crate::item::Item;
use crate::log;
use crate::pointer::PointerMonitor;
use crate::tui::interaction::InteractionRegistry;

pub struct App {
    pub items: Vec<Item>,
    /// Current selection, zero or one item
    pub selected: Vec<Item>,
    pub placeholder: String,
    pub width: u16,
    pub dropdown: Dropdown,
    pub pointer: PointerMonitor,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            items: config.items(),
            selected: vec![],
            placeholder: config.placeholder(),
            width: config.width(),
            dropdown: Dropdown::new(),
            pointer: PointerMonitor::new(),
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    /// Apply an action produced by the event handlers.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleTrigger => {
                self.dropdown.toggle_trigger(&self.pointer);
                log::log_event(&format!("dropdown {:?}", self.dropdown.visibility()));
            }
            close @ (Action::DismissDropdown | Action::CloseDropdown) => {
                if self.dropdown.is_open() {
                    self.dropdown.close();
                    log::log_event(&format!("dropdown closed ({:?})", close));
                }
            }
            Action::SelectItem(idx) => {
                if let Some(item) = self.items.get(idx) {
                    let change = self.dropdown.select_item(item, &self.selected);
                    self.apply_change(change);
                }
            }
            Action::DraftChar(c) => self.dropdown.draft_mut().insert_char(c),
            Action::DraftBackspace => self.dropdown.draft_mut().backspace(),
            Action::DraftDelete => self.dropdown.draft_mut().delete(),
            Action::DraftLeft => self.dropdown.draft_mut().move_left(),
            Action::DraftRight => self.dropdown.draft_mut().move_right(),
            Action::DraftHome => self.dropdown.draft_mut().move_home(),
            Action::DraftEnd => self.dropdown.draft_mut().move_end(),
            Action::DraftReplace(text) => self.dropdown.update_draft_text(text),
            Action::SubmitDraft => {
                if let Some(change) = self.dropdown.submit_draft() {
                    self.apply_change(change);
                }
            }
        }
    }

    /// Merge a change reported by the dropdown.
    pub fn apply_change(&mut self, change: SelectionChange) {
        if let Some(item) = change.created {
            log::log_event(&format!("created item {} {:?}", item.id, item.label));
            self.items.push(item);
        }

        match change.selection.first() {
            Some(item) => log::log_event(&format!("selected {} {:?}", item.id, item.label)),
            None => log::log_event("selection cleared"),
        }
        self.selected = change.selection;
    }

    /// The selected item, if any.
    pub fn current(&self) -> Option<&Item> {
        self.selected.first()
    }
}

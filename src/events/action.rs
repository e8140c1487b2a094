//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App processes them to update state.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Dropdown ===
    /// Activate the header: open when closed, close when open
    ToggleTrigger,
    /// Close the list because of a press outside the widget
    DismissDropdown,
    /// Close the list from the keyboard
    CloseDropdown,
    /// Toggle the item at this index of the candidate list
    SelectItem(usize),

    // === Draft input ===
    /// Add character to draft at cursor
    DraftChar(char),
    /// Delete character before cursor
    DraftBackspace,
    /// Delete character at cursor
    DraftDelete,
    /// Move cursor left
    DraftLeft,
    /// Move cursor right
    DraftRight,
    /// Move cursor to start
    DraftHome,
    /// Move cursor to end
    DraftEnd,
    /// Replace the draft text (paste)
    DraftReplace(String),
    /// Create and select an item from the draft
    SubmitDraft,

    /// No action needed
    None,
}

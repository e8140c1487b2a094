//! Keyboard event handling by dropdown state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.dropdown.is_open() {
        handle_open_mode(key)
    } else {
        handle_closed_mode(key)
    }
}

fn handle_closed_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleTrigger,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// While open, keys edit the draft field.
fn handle_open_mode(key: KeyEvent) -> Action {
    match key.code {
        // Enter commits the draft and nothing else
        KeyCode::Enter => Action::SubmitDraft,
        KeyCode::Esc => Action::CloseDropdown,
        KeyCode::Backspace => Action::DraftBackspace,
        KeyCode::Delete => Action::DraftDelete,
        KeyCode::Left => Action::DraftLeft,
        KeyCode::Right => Action::DraftRight,
        KeyCode::Home => Action::DraftHome,
        KeyCode::End => Action::DraftEnd,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::DraftChar(c)
        }
        _ => Action::None,
    }
}

//! Mouse event handling.
//!
//! Left presses are first offered to the pointer monitor, which reports any
//! widget the press landed outside of, and then hit-tested against the
//! interaction registry populated during the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the resulting actions, in dispatch order.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Vec<Action> {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let mut actions = app.pointer.press(x, y);
            let click = app.interactions.handle_click(x, y);
            if click != Action::None {
                actions.push(click);
            }
            actions
        }
        _ => vec![],
    }
}

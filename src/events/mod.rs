//! Event handling for keyboard and mouse input.
//!
//! Handlers translate crossterm events into [`Action`]s; the App applies them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;

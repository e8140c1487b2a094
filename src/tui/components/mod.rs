//! UI components for the TUI.
//!
//! - `dropdown` - The selector: header trigger, draft input, and option list

mod dropdown;

pub use dropdown::render_dropdown;

//! Terminal UI: theme, hit testing, and rendering.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

use std::io::stdout;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::error::{Result, SelectboxError};

/// Switch the terminal into raw mode with mouse capture on the alternate screen.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode().map_err(|e| SelectboxError::Terminal(e.to_string()))?;
    execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    Ok(())
}

/// Undo [`setup_terminal`]. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen);
}

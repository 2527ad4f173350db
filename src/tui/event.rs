//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::error::FocusTimerError;
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Wait up to `timeout` for a terminal event and apply it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, FocusTimerError> {
    if !event::poll(timeout)
        .map_err(|e| FocusTimerError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FocusTimerError::Terminal(format!("Event read failed: {e}")))? {
        // Windows reports releases too
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(app.handle_key(key)),
        _ => Ok(None),
    }
}

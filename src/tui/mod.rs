//! Terminal User Interface (TUI) for focustimer.
//!
//! Pomodoro, stopwatch and clock tabs drawn with ratatui over crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, SettingsEditor};
pub use event::Action;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::controller::Controller;
use crate::error::FocusTimerError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(controller: Controller) -> Result<(), FocusTimerError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusTimerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocusTimerError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusTimerError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(controller);
    tracing::info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!(ok = result.is_ok(), "tui stopped");
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FocusTimerError> {
    loop {
        app.refresh_clock();
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusTimerError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = app.poll_timeout(Instant::now());
        if let Some(Action::Quit) = event::handle_events(app, timeout)? {
            break;
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}

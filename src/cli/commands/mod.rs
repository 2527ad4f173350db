//! Command implementations for focustimer.
//!
//! Each command returns the text to print; `main` prints it.

mod config;
mod tui;

pub use config::config;
pub use tui::{build_controller, tui};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::clock::ClockReading;
use crate::error::FocusTimerError;
use crate::output::format_clock;

/// Execute clock command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn clock(format: OutputFormat) -> Result<String, FocusTimerError> {
    format_clock(&ClockReading::now(), format)
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, FocusTimerError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focustimer", &mut buf);
    String::from_utf8(buf).map_err(|e| FocusTimerError::Parse(format!("UTF-8 error: {e}")))
}

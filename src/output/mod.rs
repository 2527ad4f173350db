//! Output formatting for focustimer.
//!
//! Every command builds a serializable value and renders it either as
//! colored text or as pretty-printed JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::clock::ClockReading;
use crate::config::Config;
use crate::error::FocusTimerError;

pub use json::*;
pub use pretty::*;

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns `FocusTimerError::Parse` if JSON serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, FocusTimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config)),
        OutputFormat::Json => to_json(config),
    }
}

/// Format a clock reading based on output format
///
/// # Errors
///
/// Returns `FocusTimerError::Parse` if JSON serialization fails.
pub fn format_clock(reading: &ClockReading, format: OutputFormat) -> Result<String, FocusTimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_clock_pretty(reading)),
        OutputFormat::Json => to_json(reading),
    }
}

/// Format the background preset list based on output format
///
/// # Errors
///
/// Returns `FocusTimerError::Parse` if JSON serialization fails.
pub fn format_backgrounds(current: &str, format: OutputFormat) -> Result<String, FocusTimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_backgrounds_pretty(current)),
        OutputFormat::Json => format_backgrounds_json(current),
    }
}

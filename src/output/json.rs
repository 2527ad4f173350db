//! JSON output formatting for focustimer.

use serde::Serialize;
use serde_json::json;

use crate::appearance::PRESETS;
use crate::error::FocusTimerError;

/// Format the background presets as JSON
///
/// # Errors
///
/// Returns `FocusTimerError::Parse` if JSON serialization fails.
pub fn format_backgrounds_json(current: &str) -> Result<String, FocusTimerError> {
    let items: Vec<_> = PRESETS
        .iter()
        .map(|preset| {
            json!({
                "name": preset.name,
                "kind": preset.kind,
                "colors": preset.colors.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "angle": preset.angle,
                "current": preset.name.eq_ignore_ascii_case(current),
            })
        })
        .collect();

    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusTimerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusTimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

//! Pomodoro segment lengths and input validation.

use serde::{Deserialize, Serialize};

use crate::error::FocusTimerError;

/// Smallest accepted segment length in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Largest accepted segment length in minutes.
pub const MAX_MINUTES: u32 = 60;

/// Segment lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    work: u32,
    short_break: u32,
    long_break: u32,
}

/// Names one of the three segment lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
    /// Focus segment length.
    Work,
    /// Short break length.
    ShortBreak,
    /// Long break length.
    LongBreak,
}

impl SettingKey {
    /// All keys, in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Parse a key from its CLI spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "w" => Some(Self::Work),
            "short-break" | "short_break" | "shortbreak" | "short" | "sb" => Some(Self::ShortBreak),
            "long-break" | "long_break" | "longbreak" | "long" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TimerSettings {
    /// Create settings, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if any value is outside 1..=60.
    pub fn new(work: u32, short_break: u32, long_break: u32) -> Result<Self, FocusTimerError> {
        Ok(Self {
            work: check_minutes(SettingKey::Work, work)?,
            short_break: check_minutes(SettingKey::ShortBreak, short_break)?,
            long_break: check_minutes(SettingKey::LongBreak, long_break)?,
        })
    }

    /// Minutes configured for `key`.
    #[must_use]
    pub const fn get(&self, key: SettingKey) -> u32 {
        match key {
            SettingKey::Work => self.work,
            SettingKey::ShortBreak => self.short_break,
            SettingKey::LongBreak => self.long_break,
        }
    }

    /// Seconds configured for `key`.
    #[must_use]
    pub const fn seconds(&self, key: SettingKey) -> u64 {
        self.get(key) as u64 * 60
    }

    /// Set `key` to `minutes`. The previous value is kept on error.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if `minutes` is outside 1..=60.
    pub fn set(&mut self, key: SettingKey, minutes: u32) -> Result<(), FocusTimerError> {
        let minutes = check_minutes(key, minutes)?;
        match key {
            SettingKey::Work => self.work = minutes,
            SettingKey::ShortBreak => self.short_break = minutes,
            SettingKey::LongBreak => self.long_break = minutes,
        }
        Ok(())
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

fn check_minutes(key: SettingKey, minutes: u32) -> Result<u32, FocusTimerError> {
    if (MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(FocusTimerError::InvalidSetting(format!(
            "{key} must be between {MIN_MINUTES} and {MAX_MINUTES} minutes, got {minutes}"
        )))
    }
}

/// Parse raw user input as a minute count in 1..=60.
///
/// # Errors
///
/// Returns `FocusTimerError::InvalidSetting` for non-numeric or out-of-range input.
pub fn parse_minutes(key: SettingKey, raw: &str) -> Result<u32, FocusTimerError> {
    let trimmed = raw.trim();
    let minutes: u32 = trimmed.parse().map_err(|_| {
        FocusTimerError::InvalidSetting(format!("{key} must be a whole number, got {trimmed:?}"))
    })?;
    check_minutes(key, minutes)
}

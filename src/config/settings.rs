//! Configuration settings for focustimer.
//!
//! Settings are loaded from `~/.focustimer/config.yaml`. Edits made inside
//! the TUI are never written back; only `focustimer config set` writes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::appearance::{
    default_custom, find_preset, Appearance, Background, BackgroundKind, Rgb, CUSTOM_NAME, PRESETS,
};
use crate::config::Paths;
use crate::error::FocusTimerError;
use crate::timer::{parse_minutes, SettingKey, TimerSettings};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Segment lengths.
    pub timer: TimerConfig,
    /// Look and feel.
    pub appearance: AppearanceConfig,
    /// End-of-segment alerts.
    pub notifications: NotificationConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// Segment lengths in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work segment length.
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break length.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
}

/// Appearance at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Start in fullscreen layout.
    pub fullscreen: bool,
    /// Background preset name, or `Custom` for the section below.
    #[serde(default = "default_background")]
    pub background: String,
    /// User-defined background.
    pub custom: CustomBackgroundConfig,
}

/// User-defined background as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomBackgroundConfig {
    /// `solid` or `gradient`.
    pub kind: String,
    /// One to five `#rrggbb` stops.
    pub colors: Vec<String>,
    /// Gradient angle in degrees, 0-360.
    pub angle: u16,
}

impl CustomBackgroundConfig {
    /// Validate and convert.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` for an unknown kind, a bad
    /// color, no colors, too many colors or an angle above 360.
    pub fn to_background(&self) -> Result<Background, FocusTimerError> {
        let colors = self
            .colors
            .iter()
            .map(|c| Rgb::parse(c))
            .collect::<Result<Vec<_>, _>>()?;
        Background::custom(BackgroundKind::parse(&self.kind)?, colors, self.angle)
    }
}

impl From<&Background> for CustomBackgroundConfig {
    fn from(background: &Background) -> Self {
        Self {
            kind: background.kind.as_str().to_string(),
            colors: background.colors.iter().map(ToString::to_string).collect(),
            angle: background.angle,
        }
    }
}

/// Notification switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Show a desktop notification.
    #[serde(default = "default_true")]
    pub desktop: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `FOCUSTIMER_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Keys accepted by `focustimer config set`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    /// Work segment minutes (1-60).
    Work,
    /// Short break minutes (1-60).
    ShortBreak,
    /// Long break minutes (1-60).
    LongBreak,
    /// Start in dark mode (true/false).
    DarkMode,
    /// Start fullscreen (true/false).
    Fullscreen,
    /// Background preset name, or `custom`.
    Background,
    /// Custom background fill (solid/gradient).
    CustomKind,
    /// Custom background stops, comma separated (e.g. `#ff0000,#0000ff`).
    CustomColors,
    /// Custom gradient angle (0-360).
    CustomAngle,
    /// Terminal bell (true/false).
    Sound,
    /// Desktop notifications (true/false).
    DesktopNotifications,
    /// Log filter, e.g. `info` or `focustimer=debug`.
    LogLevel,
}

// Default value functions for serde
const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

fn default_background() -> String {
    PRESETS[0].name.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            fullscreen: false,
            background: default_background(),
            custom: CustomBackgroundConfig::default(),
        }
    }
}

impl Default for CustomBackgroundConfig {
    fn default() -> Self {
        Self::from(&default_custom())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sound: default_true(),
            desktop: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load() -> Result<Self, FocusTimerError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusTimerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusTimerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FocusTimerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate().map_err(|e| {
            FocusTimerError::Config(format!("Invalid config file {}: {e}", path.display()))
        })?;

        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), FocusTimerError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusTimerError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocusTimerError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocusTimerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid value.
    pub fn validate(&self) -> Result<(), FocusTimerError> {
        self.timer_settings()?;
        self.appearance()?;
        Ok(())
    }

    /// Segment lengths as validated settings.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if a length is outside 1..=60.
    pub fn timer_settings(&self) -> Result<TimerSettings, FocusTimerError> {
        TimerSettings::new(
            self.timer.work_minutes,
            self.timer.short_break_minutes,
            self.timer.long_break_minutes,
        )
    }

    /// Initial appearance.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if the background preset is
    /// unknown or the custom background is invalid.
    pub fn appearance(&self) -> Result<Appearance, FocusTimerError> {
        let custom = self.appearance.custom.to_background()?;
        let mut appearance =
            Appearance::new(self.appearance.dark_mode, self.appearance.fullscreen, 0)
                .with_custom(custom);

        let name = self.appearance.background.trim();
        if name.eq_ignore_ascii_case(CUSTOM_NAME) {
            appearance.select_custom();
        } else {
            let index = find_preset(name).ok_or_else(|| {
                FocusTimerError::InvalidSetting(format!(
                    "Unknown background {name:?}; run 'focustimer config backgrounds' for the list"
                ))
            })?;
            appearance.select_preset(index);
        }
        Ok(appearance)
    }

    /// Set one value from its string form. The config is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if the value does not fit the key.
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<(), FocusTimerError> {
        match key {
            ConfigKey::Work => {
                self.timer.work_minutes = parse_minutes(SettingKey::Work, value)?;
            }
            ConfigKey::ShortBreak => {
                self.timer.short_break_minutes = parse_minutes(SettingKey::ShortBreak, value)?;
            }
            ConfigKey::LongBreak => {
                self.timer.long_break_minutes = parse_minutes(SettingKey::LongBreak, value)?;
            }
            ConfigKey::DarkMode => self.appearance.dark_mode = parse_bool(value)?,
            ConfigKey::Fullscreen => self.appearance.fullscreen = parse_bool(value)?,
            ConfigKey::Background => {
                if value.trim().eq_ignore_ascii_case(CUSTOM_NAME) {
                    self.appearance.background = CUSTOM_NAME.to_string();
                } else {
                    let index = find_preset(value).ok_or_else(|| {
                        FocusTimerError::InvalidSetting(format!("Unknown background {value:?}"))
                    })?;
                    self.appearance.background = PRESETS[index].name.to_string();
                }
            }
            ConfigKey::CustomKind => {
                self.appearance.custom.kind = BackgroundKind::parse(value)?.as_str().to_string();
            }
            ConfigKey::CustomColors => {
                let custom = CustomBackgroundConfig {
                    colors: value.split(',').map(|c| c.trim().to_string()).collect(),
                    ..self.appearance.custom.clone()
                };
                custom.to_background()?;
                self.appearance.custom = custom;
            }
            ConfigKey::CustomAngle => {
                let angle: u16 = value.trim().parse().map_err(|_| {
                    FocusTimerError::InvalidSetting(format!(
                        "Expected an angle between 0 and 360, got {value:?}"
                    ))
                })?;
                let custom = CustomBackgroundConfig {
                    angle,
                    ..self.appearance.custom.clone()
                };
                custom.to_background()?;
                self.appearance.custom = custom;
            }
            ConfigKey::Sound => self.notifications.sound = parse_bool(value)?,
            ConfigKey::DesktopNotifications => self.notifications.desktop = parse_bool(value)?,
            ConfigKey::LogLevel => {
                let level = value.trim();
                if level.is_empty() {
                    return Err(FocusTimerError::InvalidSetting(
                        "Log level cannot be empty".to_string(),
                    ));
                }
                self.logging.level = level.to_string();
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool, FocusTimerError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(FocusTimerError::InvalidSetting(format!(
            "Expected true or false, got {other:?}"
        ))),
    }
}

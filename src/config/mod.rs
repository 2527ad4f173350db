//! Configuration management for focustimer.
//!
//! This module handles loading and saving configuration from `~/.focustimer/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    AppearanceConfig, Config, ConfigKey, LoggingConfig, NotificationConfig, TimerConfig,
};

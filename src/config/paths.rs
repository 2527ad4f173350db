//! Path resolution for focustimer configuration and log files.
//!
//! All focustimer data is stored in `~/.focustimer/` unless
//! `FOCUSTIMER_HOME` points elsewhere:
//! - `config.yaml` - Main configuration file
//! - `logs/` - Daily rotated logs written while the TUI is open

use std::path::PathBuf;

use crate::error::FocusTimerError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "FOCUSTIMER_HOME";

/// Paths to focustimer configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focustimer/`
    pub root: PathBuf,
    /// Config file: `~/.focustimer/config.yaml`
    pub config_file: PathBuf,
    /// Logs directory: `~/.focustimer/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Resolve paths from `FOCUSTIMER_HOME`, falling back to `$HOME/.focustimer`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, FocusTimerError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            FocusTimerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focustimer")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusTimerError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FocusTimerError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

//! Config command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocusTimerError;
use crate::output::{format_backgrounds, format_config, to_json};

/// Execute config subcommands against the default paths.
///
/// # Errors
///
/// Returns an error if the config cannot be read, validated or written.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, FocusTimerError> {
    let paths = Paths::new()?;
    config_at(&paths, cmd, format)
}

/// Execute config subcommands against `paths`.
///
/// # Errors
///
/// Returns an error if the config cannot be read, validated or written.
pub fn config_at(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, FocusTimerError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, format)
        }

        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from_path(&paths.config_file)?;
            config.set_value(key, &value)?;
            paths.ensure_dirs()?;
            config.save_to_path(&paths.config_file)?;
            tracing::info!(?key, %value, "config updated");

            match format {
                OutputFormat::Json => format_config(&config, format),
                OutputFormat::Pretty => Ok(format!(
                    "{} {:?} = {}",
                    "Updated".green(),
                    key,
                    value.trim()
                )),
            }
        }

        ConfigCommands::Reset => {
            let config = Config::default();
            paths.ensure_dirs()?;
            config.save_to_path(&paths.config_file)?;
            tracing::info!("config reset to defaults");

            match format {
                OutputFormat::Json => format_config(&config, format),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}",
                    "Restored defaults in".green(),
                    paths.config_file.display()
                )),
            }
        }

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&json!({
                "config_file": paths.config_file,
                "logs": paths.logs,
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },

        ConfigCommands::Backgrounds => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_backgrounds(&config.appearance.background, format)
        }
    }
}

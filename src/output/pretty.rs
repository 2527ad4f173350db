use colored::Colorize;

use crate::appearance::{CUSTOM_NAME, PRESETS};
use crate::clock::ClockReading;
use crate::config::Config;

fn on_off(value: bool) -> String {
    if value {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

/// Format the configuration as pretty output
pub fn format_config_pretty(config: &Config) -> String {
    let mut lines = Vec::new();

    lines.push("Timer".bold().to_string());
    lines.push(format!("  Work:          {} min", config.timer.work_minutes));
    lines.push(format!("  Short break:   {} min", config.timer.short_break_minutes));
    lines.push(format!("  Long break:    {} min", config.timer.long_break_minutes));
    lines.push(String::new());

    lines.push("Appearance".bold().to_string());
    lines.push(format!("  Dark mode:     {}", on_off(config.appearance.dark_mode)));
    lines.push(format!("  Fullscreen:    {}", on_off(config.appearance.fullscreen)));
    lines.push(format!("  Background:    {}", config.appearance.background.cyan()));
    let custom = &config.appearance.custom;
    lines.push(format!(
        "  Custom:        {} {}° {}",
        custom.kind,
        custom.angle,
        custom.colors.join(" ").dimmed()
    ));
    lines.push(String::new());

    lines.push("Notifications".bold().to_string());
    lines.push(format!("  Sound:         {}", on_off(config.notifications.sound)));
    lines.push(format!("  Desktop:       {}", on_off(config.notifications.desktop)));
    lines.push(String::new());

    lines.push("Logging".bold().to_string());
    lines.push(format!("  Level:         {}", config.logging.level));

    lines.join("\n")
}

/// Format a clock reading as pretty output
pub fn format_clock_pretty(reading: &ClockReading) -> String {
    format!("{}\n{}", reading.time.bold(), reading.date.dimmed())
}

/// Format the background presets, marking the current one
pub fn format_backgrounds_pretty(current: &str) -> String {
    let mut output = format!("Backgrounds ({} presets)\n", PRESETS.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for preset in &PRESETS {
        let marker = if preset.name.eq_ignore_ascii_case(current) {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        let colors = preset
            .colors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!(
            "{marker} {}  {}\n",
            preset.name.as_ref().bold(),
            colors.dimmed()
        ));
    }

    let marker = if current.trim().eq_ignore_ascii_case(CUSTOM_NAME) { "*" } else { " " };
    output.push_str(&format!(
        "{} {}  {}\n",
        marker.green(),
        CUSTOM_NAME.bold(),
        "appearance.custom in config.yaml".dimmed()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_pretty() {
        colored::control::set_override(false);
        let output = format_config_pretty(&Config::default());
        assert!(output.contains("Work:          25 min"));
        assert!(output.contains("Background:    Pure White"));
        assert!(output.contains("Sound:         on"));
        assert!(output.contains("Custom:        gradient 135° #667eea #764ba2"));
    }

    #[test]
    fn test_format_backgrounds_pretty_marks_current() {
        colored::control::set_override(false);
        let output = format_backgrounds_pretty("focus only");
        assert!(output.starts_with("Backgrounds (10 presets)"));
        assert!(output.contains("* Focus Only  #007fff"));
        assert!(output.contains("  Pure White  #ffffff"));
        assert!(output.contains("  Custom  appearance.custom"));

        let output = format_backgrounds_pretty("custom");
        assert!(output.contains("* Custom  appearance.custom"));
    }
}

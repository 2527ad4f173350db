//! TUI command implementation.

use crate::appearance::{find_preset, CUSTOM_NAME};
use crate::cli::args::TuiArgs;
use crate::config::{Config, Paths};
use crate::controller::Controller;
use crate::error::FocusTimerError;
use crate::logging;
use crate::notify::notifier_for;
use crate::timer::{PomodoroTimer, SettingKey, TimerSettings};

/// Open the interactive timer.
///
/// # Errors
///
/// Returns an error if the config is invalid, an override is rejected,
/// or the terminal cannot be driven.
pub fn tui(args: &TuiArgs) -> Result<String, FocusTimerError> {
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    let _guard = logging::init_file(&paths, &config.logging.level)?;

    let controller = build_controller(&config, args)?;
    crate::tui::run(controller)?;
    Ok(String::new())
}

/// Build the controller from `config` with `args` applied on top.
///
/// # Errors
///
/// Returns `FocusTimerError::InvalidSetting` if a segment length or
/// background name is rejected.
pub fn build_controller(config: &Config, args: &TuiArgs) -> Result<Controller, FocusTimerError> {
    let settings = TimerSettings::new(
        args.work.unwrap_or(config.timer.work_minutes),
        args.short_break.unwrap_or(config.timer.short_break_minutes),
        args.long_break.unwrap_or(config.timer.long_break_minutes),
    )?;

    let mut appearance = config.appearance()?;
    if args.dark && !appearance.dark_mode {
        appearance.toggle_dark_mode();
    }
    if args.fullscreen && !appearance.fullscreen {
        appearance.toggle_fullscreen();
    }
    if let Some(name) = &args.background {
        if name.trim().eq_ignore_ascii_case(CUSTOM_NAME) {
            appearance.select_custom();
        } else {
            let index = find_preset(name).ok_or_else(|| {
                FocusTimerError::InvalidSetting(format!(
                    "Unknown background {name:?}; run 'focustimer config backgrounds' for the list"
                ))
            })?;
            appearance.select_preset(index);
        }
    }

    let notifier = notifier_for(
        config.notifications.sound && !args.no_sound,
        config.notifications.desktop && !args.no_desktop,
    );

    tracing::info!(
        work = settings.get(SettingKey::Work),
        short_break = settings.get(SettingKey::ShortBreak),
        long_break = settings.get(SettingKey::LongBreak),
        background = %appearance.background().name,
        "starting timer"
    );

    Ok(Controller::new(
        PomodoroTimer::new(settings),
        appearance,
        notifier,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Tab;
    use crate::timer::SessionMode;

    #[test]
    fn test_build_controller_from_config() {
        let mut config = Config::default();
        config.timer.work_minutes = 40;

        let controller = build_controller(&config, &TuiArgs::default()).unwrap();
        assert_eq!(controller.tab(), Tab::Pomodoro);
        assert_eq!(controller.pomodoro().mode(), SessionMode::Work);
        assert_eq!(controller.pomodoro().remaining_seconds(), 2400);
        assert!(!controller.is_active_running());
    }

    #[test]
    fn test_build_controller_overrides() {
        let args = TuiArgs {
            work: Some(50),
            long_break: Some(30),
            dark: true,
            fullscreen: true,
            background: Some("focus only".to_string()),
            ..TuiArgs::default()
        };

        let controller = build_controller(&Config::default(), &args).unwrap();
        let settings = controller.pomodoro().settings();
        assert_eq!(settings.get(SettingKey::Work), 50);
        assert_eq!(settings.get(SettingKey::ShortBreak), 5);
        assert_eq!(settings.get(SettingKey::LongBreak), 30);

        let appearance = controller.appearance();
        assert!(appearance.dark_mode);
        assert!(appearance.fullscreen);
        assert_eq!(appearance.background().name, "Focus Only");
    }

    #[test]
    fn test_build_controller_custom_background() {
        let mut config = Config::default();
        config.appearance.custom.colors = vec!["#112233".to_string()];
        let args = TuiArgs {
            background: Some("custom".to_string()),
            ..TuiArgs::default()
        };

        let controller = build_controller(&config, &args).unwrap();
        let background = controller.appearance().background();
        assert_eq!(background.name, CUSTOM_NAME);
        assert_eq!(background.colors.as_ref(), &[crate::appearance::Rgb(0x11, 0x22, 0x33)]);
    }

    #[test]
    fn test_build_controller_unknown_background() {
        let args = TuiArgs {
            background: Some("Plaid".to_string()),
            ..TuiArgs::default()
        };
        let err = build_controller(&Config::default(), &args).unwrap_err();
        assert!(matches!(err, FocusTimerError::InvalidSetting(_)));
    }
}

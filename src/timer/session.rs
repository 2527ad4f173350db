//! Pomodoro session cycling.
//!
//! A [`PomodoroTimer`] counts down the current segment one tick at a time and,
//! when the segment runs out, rotates between work and break segments:
//! every completed work segment is followed by a short break, except every
//! fourth, which is followed by a long break.

use serde::{Deserialize, Serialize};

use crate::error::FocusTimerError;
use crate::timer::format::format_mmss;
use crate::timer::settings::{parse_minutes, SettingKey, TimerSettings};

/// Number of completed work segments between long breaks.
pub const SESSIONS_PER_LONG_BREAK: u32 = 4;

/// Kind of Pomodoro segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// Focus segment.
    Work,
    /// Short break between work segments.
    ShortBreak,
    /// Long break after every fourth work segment.
    LongBreak,
}

impl SessionMode {
    /// All modes, in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::ShortBreak, Self::LongBreak];

    /// The setting that seeds segments of this mode.
    #[must_use]
    pub const fn setting_key(&self) -> SettingKey {
        match self {
            Self::Work => SettingKey::Work,
            Self::ShortBreak => SettingKey::ShortBreak,
            Self::LongBreak => SettingKey::LongBreak,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.setting_key().display_name()
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An automatic change of segment caused by the countdown reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Segment that just finished.
    pub from: SessionMode,
    /// Segment that is now loaded.
    pub to: SessionMode,
    /// Completed work segments after the transition.
    pub completed_work_sessions: u32,
}

/// Countdown timer cycling through work and break segments.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: TimerSettings,
    mode: SessionMode,
    /// Length of the current segment, used for progress.
    segment_seconds: u64,
    remaining_seconds: u64,
    completed_work_sessions: u32,
    running: bool,
}

impl PomodoroTimer {
    /// Create a timer at the start of a work segment.
    #[must_use]
    pub const fn new(settings: TimerSettings) -> Self {
        let seconds = settings.seconds(SettingKey::Work);
        Self {
            settings,
            mode: SessionMode::Work,
            segment_seconds: seconds,
            remaining_seconds: seconds,
            completed_work_sessions: 0,
            running: false,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Load a segment of `mode` from settings and stop.
    pub fn select_mode(&mut self, mode: SessionMode) {
        self.running = false;
        self.mode = mode;
        self.seed(self.settings.seconds(mode.setting_key()));
        tracing::debug!(%mode, "session mode selected");
    }

    /// Stop and restart the current segment from its setting.
    pub fn reset(&mut self) {
        self.running = false;
        self.seed(self.settings.seconds(self.mode.setting_key()));
    }

    /// Start a one-off work segment of `minutes`, leaving settings untouched.
    pub fn quick_focus(&mut self, minutes: u32) {
        self.mode = SessionMode::Work;
        self.seed(u64::from(minutes.max(1)) * 60);
        tracing::debug!(minutes, "quick focus segment loaded");
    }

    /// Validate raw input and store it as the setting for `key`.
    ///
    /// Rejected input leaves settings and countdown untouched.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` for non-numeric or out-of-range input.
    pub fn update_setting(&mut self, key: SettingKey, raw: &str) -> Result<(), FocusTimerError> {
        let minutes = parse_minutes(key, raw)?;
        self.set_setting(key, minutes)
    }

    /// Store `minutes` as the setting for `key`.
    ///
    /// If `key` belongs to the current mode the countdown is reseeded at once.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if `minutes` is out of range.
    pub fn set_setting(&mut self, key: SettingKey, minutes: u32) -> Result<(), FocusTimerError> {
        self.settings.set(key, minutes)?;
        if self.mode.setting_key() == key {
            self.seed(self.settings.seconds(key));
        }
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the transition when the segment ran out. The timer is stopped
    /// after a transition.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        tracing::trace!(remaining = self.remaining_seconds, "pomodoro tick");

        if self.remaining_seconds == 0 {
            Some(self.complete_segment())
        } else {
            None
        }
    }

    fn complete_segment(&mut self) -> Transition {
        self.running = false;
        let from = self.mode;

        let to = match from {
            SessionMode::Work => {
                self.completed_work_sessions = self.completed_work_sessions.saturating_add(1);
                if self.completed_work_sessions % SESSIONS_PER_LONG_BREAK == 0 {
                    SessionMode::LongBreak
                } else {
                    SessionMode::ShortBreak
                }
            }
            SessionMode::ShortBreak | SessionMode::LongBreak => SessionMode::Work,
        };

        self.mode = to;
        self.seed(self.settings.seconds(to.setting_key()));

        tracing::info!(
            %from,
            %to,
            completed = self.completed_work_sessions,
            "segment complete"
        );

        Transition {
            from,
            to,
            completed_work_sessions: self.completed_work_sessions,
        }
    }

    fn seed(&mut self, seconds: u64) {
        self.segment_seconds = seconds;
        self.remaining_seconds = seconds;
    }

    /// Get progress through the current segment (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.segment_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.segment_seconds as f64)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// One-based number of the work session in progress.
    #[must_use]
    pub const fn session_number(&self) -> u32 {
        self.completed_work_sessions.saturating_add(1)
    }

    /// "Focus Time" during work, "Break Time" otherwise.
    #[must_use]
    pub const fn phase_label(&self) -> &'static str {
        if self.mode.is_break() {
            "Break Time"
        } else {
            "Focus Time"
        }
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_segment(timer: &mut PomodoroTimer) -> Transition {
        timer.start();
        let ticks = timer.remaining_seconds();
        for _ in 1..ticks {
            assert!(timer.tick().is_none());
        }
        timer.tick().expect("segment should end on its last tick")
    }

    #[test]
    fn test_fresh_timer_for_all_settings() {
        for w in 1..=60 {
            for s in [1, 30, 60] {
                for l in [1, 30, 60] {
                    let timer = PomodoroTimer::new(TimerSettings::new(w, s, l).unwrap());
                    assert_eq!(timer.mode(), SessionMode::Work);
                    assert_eq!(timer.remaining_seconds(), u64::from(w) * 60);
                    assert_eq!(timer.completed_work_sessions(), 0);
                    assert!(!timer.is_running());
                }
            }
        }
    }

    #[test]
    fn test_work_countdown_goes_to_short_break() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(2, 3, 4).unwrap());
        timer.start();

        for _ in 0..119 {
            assert!(timer.tick().is_none());
            assert!(timer.is_running());
        }
        assert_eq!(timer.remaining_seconds(), 1);

        let transition = timer.tick().unwrap();
        assert_eq!(
            transition,
            Transition {
                from: SessionMode::Work,
                to: SessionMode::ShortBreak,
                completed_work_sessions: 1,
            }
        );
        assert_eq!(timer.mode(), SessionMode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 180);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_break_goes_back_to_work() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 1, 1).unwrap());
        timer.select_mode(SessionMode::LongBreak);
        let transition = run_segment(&mut timer);
        assert_eq!(transition.to, SessionMode::Work);
        assert_eq!(timer.remaining_seconds(), 60);
        assert_eq!(timer.completed_work_sessions(), 0);
    }

    #[test]
    fn test_four_cycles_end_in_long_break() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 1, 1).unwrap());
        let mut breaks = Vec::new();

        for _ in 0..4 {
            let to_break = run_segment(&mut timer);
            breaks.push(to_break.to);
            let to_work = run_segment(&mut timer);
            assert_eq!(to_work.to, SessionMode::Work);
        }

        assert_eq!(timer.completed_work_sessions(), 4);
        assert_eq!(
            breaks,
            vec![
                SessionMode::ShortBreak,
                SessionMode::ShortBreak,
                SessionMode::ShortBreak,
                SessionMode::LongBreak,
            ]
        );
    }

    #[test]
    fn test_eighth_session_is_long_break_too() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 1, 1).unwrap());
        let mut long_breaks = Vec::new();
        for _ in 0..8 {
            let transition = run_segment(&mut timer);
            if transition.to == SessionMode::LongBreak {
                long_breaks.push(transition.completed_work_sessions);
            }
            run_segment(&mut timer);
        }
        assert_eq!(long_breaks, vec![4, 8]);
    }

    #[test]
    fn test_tick_when_paused_does_nothing() {
        let mut timer = PomodoroTimer::default();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_reset_keeps_mode_and_count() {
        for mode in SessionMode::ALL {
            let mut timer = PomodoroTimer::new(TimerSettings::new(1, 2, 3).unwrap());
            run_segment(&mut timer);
            timer.select_mode(mode);
            timer.start();
            for _ in 0..30 {
                timer.tick();
            }

            timer.reset();
            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.completed_work_sessions(), 1);
            assert_eq!(
                timer.remaining_seconds(),
                timer.settings().seconds(mode.setting_key())
            );
            assert!(!timer.is_running());
        }
    }

    #[test]
    fn test_reset_after_quick_focus_reloads_work_setting() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 2, 3).unwrap());
        run_segment(&mut timer);
        timer.quick_focus(5);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 270);

        timer.reset();
        assert_eq!(timer.mode(), SessionMode::Work);
        assert_eq!(timer.completed_work_sessions(), 1);
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_manual_switch_mid_countdown() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 5, 15).unwrap());
        timer.start();
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 10);

        timer.select_mode(SessionMode::ShortBreak);
        assert_eq!(timer.mode(), SessionMode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_update_setting_for_current_mode_reseeds() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        timer.tick();

        timer.update_setting(SettingKey::Work, "40").unwrap();
        assert_eq!(timer.remaining_seconds(), 2400);
        assert!(timer.is_running());
    }

    #[test]
    fn test_update_setting_for_other_mode_only_affects_future() {
        let mut timer = PomodoroTimer::default();
        timer.update_setting(SettingKey::ShortBreak, "10").unwrap();
        assert_eq!(timer.remaining_seconds(), 1500);

        timer.select_mode(SessionMode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_invalid_setting_is_rejected() {
        let mut timer = PomodoroTimer::default();
        assert!(timer.update_setting(SettingKey::Work, "0").is_err());
        assert!(timer.update_setting(SettingKey::Work, "abc").is_err());
        assert!(timer.update_setting(SettingKey::Work, "99").is_err());
        assert_eq!(timer.settings().get(SettingKey::Work), 25);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_quick_focus_does_not_touch_settings() {
        let mut timer = PomodoroTimer::default();
        timer.select_mode(SessionMode::LongBreak);
        timer.quick_focus(5);

        assert_eq!(timer.mode(), SessionMode::Work);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.settings().get(SettingKey::Work), 25);

        timer.reset();
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_labels_and_progress() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(1, 1, 1).unwrap());
        assert_eq!(timer.format_remaining(), "01:00");
        assert_eq!(timer.session_number(), 1);
        assert_eq!(timer.phase_label(), "Focus Time");
        assert_eq!(timer.progress(), 0.0);

        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);

        for _ in 0..30 {
            timer.tick();
        }
        assert_eq!(timer.session_number(), 2);
        assert_eq!(timer.phase_label(), "Break Time");
    }
}

//! The single owner of timer state.
//!
//! Every user action is a method here. After any action that can change a
//! running flag or the active tab, the ticker is re-derived so it is armed
//! exactly when the active tab's counter is running. Only the active tab's
//! counter may be running; leaving a tab pauses its counter.

use std::time::Instant;

use serde::Serialize;

use crate::appearance::Appearance;
use crate::error::FocusTimerError;
use crate::notify::Notifier;
use crate::timer::{PomodoroTimer, SessionMode, SettingKey, Stopwatch, Ticker, Transition};

/// Quick-focus lengths offered on the clock tab, in minutes.
pub const QUICK_FOCUS_MINUTES: [u32; 3] = [5, 15, 25];

/// Active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Pomodoro,
    Stopwatch,
    Clock,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::Pomodoro, Self::Stopwatch, Self::Clock];

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::Stopwatch => "Stopwatch",
            Self::Clock => "Clock",
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Pomodoro => 0,
            Self::Stopwatch => 1,
            Self::Clock => 2,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Pomodoro => Self::Stopwatch,
            Self::Stopwatch => Self::Clock,
            Self::Clock => Self::Pomodoro,
        }
    }

    #[must_use]
    pub const fn previous(&self) -> Self {
        match self {
            Self::Pomodoro => Self::Clock,
            Self::Stopwatch => Self::Pomodoro,
            Self::Clock => Self::Stopwatch,
        }
    }
}

/// Owns the counters, the tick cadence and the notifier.
pub struct Controller {
    tab: Tab,
    pomodoro: PomodoroTimer,
    stopwatch: Stopwatch,
    ticker: Ticker,
    appearance: Appearance,
    notifier: Box<dyn Notifier>,
}

impl Controller {
    /// Create a controller on the Pomodoro tab with nothing running.
    #[must_use]
    pub fn new(pomodoro: PomodoroTimer, appearance: Appearance, notifier: Box<dyn Notifier>) -> Self {
        Self {
            tab: Tab::Pomodoro,
            pomodoro,
            stopwatch: Stopwatch::new(),
            ticker: Ticker::default(),
            appearance,
            notifier,
        }
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn pomodoro(&self) -> &PomodoroTimer {
        &self.pomodoro
    }

    #[must_use]
    pub const fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    #[must_use]
    pub const fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Whether the counter behind the active tab is running.
    #[must_use]
    pub const fn is_active_running(&self) -> bool {
        match self.tab {
            Tab::Pomodoro => self.pomodoro.is_running(),
            Tab::Stopwatch => self.stopwatch.is_running(),
            Tab::Clock => false,
        }
    }

    /// Switch the active view. The counter being left is paused and the
    /// previous cadence is dropped.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        match self.tab {
            Tab::Pomodoro => self.pomodoro.pause(),
            Tab::Stopwatch => self.stopwatch.pause(),
            Tab::Clock => {}
        }
        tracing::debug!(from = ?self.tab, to = ?tab, "tab selected");
        self.tab = tab;
        self.ticker.disarm();
        self.sync_ticker();
    }

    /// Start or pause the active tab's counter.
    pub fn toggle_running(&mut self) {
        match self.tab {
            Tab::Pomodoro => self.pomodoro.toggle(),
            Tab::Stopwatch => self.stopwatch.toggle(),
            Tab::Clock => return,
        }
        tracing::debug!(tab = ?self.tab, running = self.is_active_running(), "toggled");
        self.sync_ticker();
    }

    /// Stop and reset the active tab's counter.
    pub fn reset(&mut self) {
        match self.tab {
            Tab::Pomodoro => self.pomodoro.reset(),
            Tab::Stopwatch => self.stopwatch.reset(),
            Tab::Clock => return,
        }
        self.sync_ticker();
    }

    /// Load a Pomodoro segment of `mode` and stop.
    pub fn select_mode(&mut self, mode: SessionMode) {
        self.pomodoro.select_mode(mode);
        self.sync_ticker();
    }

    /// Validate and apply a raw settings value.
    ///
    /// # Errors
    ///
    /// Returns `FocusTimerError::InvalidSetting` if the input is rejected; state is unchanged.
    pub fn update_setting(&mut self, key: SettingKey, raw: &str) -> Result<(), FocusTimerError> {
        self.pomodoro.update_setting(key, raw).inspect_err(|e| {
            tracing::debug!(%key, raw, error = %e, "setting rejected");
        })
    }

    /// Jump to the Pomodoro tab with a one-off work segment of `minutes`.
    pub fn quick_focus(&mut self, minutes: u32) {
        self.pomodoro.quick_focus(minutes);
        self.select_tab(Tab::Pomodoro);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.appearance.toggle_dark_mode();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.appearance.toggle_fullscreen();
    }

    pub fn next_background(&mut self) {
        self.appearance.next_background();
    }

    pub fn previous_background(&mut self) {
        self.appearance.previous_background();
    }

    /// Switch the custom background between solid and gradient.
    pub fn toggle_custom_kind(&mut self) {
        self.appearance.edit_custom().toggle_kind();
    }

    /// Turn the custom gradient by one step.
    pub fn step_custom_angle(&mut self, forward: bool) {
        self.appearance.edit_custom().step_angle(forward);
    }

    /// Snap the custom gradient to the next preset angle.
    pub fn next_custom_angle_preset(&mut self) {
        self.appearance.edit_custom().next_angle_preset();
    }

    /// Append a color stop to the custom background. Returns `false` when full.
    pub fn add_custom_color(&mut self) -> bool {
        self.appearance.edit_custom().add_color()
    }

    /// Drop the last color stop. Returns `false` when only one is left.
    pub fn remove_custom_color(&mut self) -> bool {
        self.appearance.edit_custom().remove_color()
    }

    /// Deliver a tick if one is due at `now`.
    ///
    /// Returns the segment change, if the tick ended a Pomodoro segment.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        if self.ticker.poll(now) {
            self.advance()
        } else {
            None
        }
    }

    /// Advance the active counter by one second.
    ///
    /// On a segment change the notifier is called exactly once and the
    /// ticker is disarmed.
    pub fn advance(&mut self) -> Option<Transition> {
        let transition = match self.tab {
            Tab::Pomodoro => self.pomodoro.tick(),
            Tab::Stopwatch => {
                self.stopwatch.tick();
                None
            }
            Tab::Clock => None,
        };

        if let Some(ref transition) = transition {
            self.notifier.play_notification(transition);
            self.sync_ticker();
        }
        transition
    }

    fn sync_ticker(&mut self) {
        let running = self.is_active_running();
        if running && !self.ticker.is_armed() {
            self.ticker.arm(Instant::now());
        } else if !running && self.ticker.is_armed() {
            self.ticker.disarm();
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("tab", &self.tab)
            .field("pomodoro", &self.pomodoro)
            .field("stopwatch", &self.stopwatch)
            .field("ticker", &self.ticker)
            .field("appearance", &self.appearance)
            .finish_non_exhaustive()
    }
}

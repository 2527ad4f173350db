//! Application state for the TUI.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event::Action;
use crate::appearance::BackgroundKind;
use crate::controller::{Controller, Tab, QUICK_FOCUS_MINUTES};
use crate::notify::notification_body;
use crate::timer::{SessionMode, SettingKey};

/// Longest the event loop sleeps, so the clock stays current.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Longest accepted settings input; 1-60 never needs more.
const MAX_INPUT_LEN: usize = 2;

/// Inline editor for the segment lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    /// Field receiving input.
    pub selected: SettingKey,
    /// Digits typed so far.
    pub input: String,
}

impl SettingsEditor {
    const fn new() -> Self {
        Self {
            selected: SettingKey::Work,
            input: String::new(),
        }
    }

    fn select_next(&mut self) {
        self.selected = match self.selected {
            SettingKey::Work => SettingKey::ShortBreak,
            SettingKey::ShortBreak | SettingKey::LongBreak => SettingKey::LongBreak,
        };
        self.input.clear();
    }

    fn select_previous(&mut self) {
        self.selected = match self.selected {
            SettingKey::Work | SettingKey::ShortBreak => SettingKey::Work,
            SettingKey::LongBreak => SettingKey::ShortBreak,
        };
        self.input.clear();
    }
}

/// Application state.
pub struct App {
    /// Timer state and actions.
    pub controller: Controller,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the key help overlay is shown.
    pub show_help: bool,
    /// Open settings editor, if any.
    pub settings: Option<SettingsEditor>,
    /// Wall-clock time of the last refresh.
    pub now: DateTime<Local>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            status: Some("Press ? for help".to_string()),
            show_help: false,
            settings: None,
            now: Local::now(),
        }
    }

    /// Re-read the wall clock.
    pub fn refresh_clock(&mut self) {
        self.now = Local::now();
    }

    /// Deliver a due tick, if any, and report segment changes.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(transition) = self.controller.tick(now) {
            self.status = Some(notification_body(&transition));
        }
    }

    /// How long the event loop may wait for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .ticker()
            .time_until_next(now)
            .map_or(MAX_POLL, |until| until.min(MAX_POLL))
    }

    /// Apply a key press.
    ///
    /// Returns an action for the main loop, or None.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.settings.is_some() {
            self.handle_settings_key(key.code);
            return None;
        }

        if self.show_help {
            self.show_help = false;
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                return None;
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,

            // Tabs
            KeyCode::Tab => self.select_tab(self.controller.tab().next()),
            KeyCode::BackTab => self.select_tab(self.controller.tab().previous()),
            KeyCode::Char('p') => self.select_tab(Tab::Pomodoro),
            KeyCode::Char('w') => self.select_tab(Tab::Stopwatch),
            KeyCode::Char('c') => self.select_tab(Tab::Clock),

            // Counters
            KeyCode::Char(' ') => {
                self.controller.toggle_running();
                self.status = None;
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.status = None;
            }
            KeyCode::Char(c @ '1'..='3') => self.handle_number(c),
            // The editor is not drawn over the running zen layout
            KeyCode::Char('s')
                if self.controller.tab() == Tab::Pomodoro && !self.is_zen() =>
            {
                self.settings = Some(SettingsEditor::new());
                self.status = Some("↑/↓ select | type minutes | Enter apply | Esc close".to_string());
            }

            // Appearance
            KeyCode::Char('d') => self.controller.toggle_dark_mode(),
            KeyCode::Char('f') => self.controller.toggle_fullscreen(),
            KeyCode::Char('b') => {
                self.controller.next_background();
                self.announce_background();
            }
            KeyCode::Char('B') => {
                self.controller.previous_background();
                self.announce_background();
            }

            // Custom background
            KeyCode::Char('g') => {
                self.controller.toggle_custom_kind();
                self.announce_custom();
            }
            KeyCode::Char(']') => {
                self.controller.step_custom_angle(true);
                self.announce_custom();
            }
            KeyCode::Char('[') => {
                self.controller.step_custom_angle(false);
                self.announce_custom();
            }
            KeyCode::Char('=') => {
                self.controller.next_custom_angle_preset();
                self.announce_custom();
            }
            KeyCode::Char('a') => {
                if self.controller.add_custom_color() {
                    self.announce_custom();
                } else {
                    self.status = Some("Custom background is full".to_string());
                }
            }
            KeyCode::Char('x') => {
                if self.controller.remove_custom_color() {
                    self.announce_custom();
                } else {
                    self.status = Some("Custom background needs one color".to_string());
                }
            }

            _ => {}
        }

        None
    }

    /// Fullscreen with the active counter running: only the counter is drawn.
    #[must_use]
    pub fn is_zen(&self) -> bool {
        self.controller.appearance().fullscreen && self.controller.is_active_running()
    }

    fn select_tab(&mut self, tab: Tab) {
        self.controller.select_tab(tab);
        self.status = None;
    }

    fn handle_number(&mut self, c: char) {
        let index = match c {
            '1' => 0,
            '2' => 1,
            _ => 2,
        };

        match self.controller.tab() {
            Tab::Pomodoro => self.controller.select_mode(SessionMode::ALL[index]),
            Tab::Clock => {
                let minutes = QUICK_FOCUS_MINUTES[index];
                self.controller.quick_focus(minutes);
                self.status = Some(format!("Quick focus: {minutes} minutes"));
            }
            Tab::Stopwatch => {}
        }
    }

    fn announce_background(&mut self) {
        let name = &self.controller.appearance().background().name;
        self.status = Some(format!("Background: {name}"));
    }

    fn announce_custom(&mut self) {
        let background = self.controller.appearance().background();
        let status = match background.kind {
            BackgroundKind::Solid => format!("Custom: solid {}", background.colors[0]),
            BackgroundKind::Gradient => format!(
                "Custom: gradient {}° with {} colors",
                background.angle,
                background.colors.len()
            ),
        };
        self.status = Some(status);
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        let Some(editor) = self.settings.as_mut() else {
            return;
        };

        match code {
            KeyCode::Esc | KeyCode::Char('s') => {
                self.settings = None;
                self.status = None;
            }
            KeyCode::Up | KeyCode::Char('k') => editor.select_previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => editor.select_next(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if editor.input.len() < MAX_INPUT_LEN {
                    editor.input.push(c);
                }
            }
            KeyCode::Backspace => {
                editor.input.pop();
            }
            KeyCode::Enter => {
                let key = editor.selected;
                let raw = std::mem::take(&mut editor.input);
                self.status = Some(match self.controller.update_setting(key, &raw) {
                    Ok(()) => format!(
                        "{key} set to {} min",
                        self.controller.pomodoro().settings().get(key)
                    ),
                    Err(e) => e.to_string(),
                });
            }
            _ => {}
        }
    }
}

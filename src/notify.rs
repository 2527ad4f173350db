//! End-of-segment notifications.

use std::io::Write;

use notify_rust::Notification;

use crate::timer::Transition;

/// Receives a call for every automatic segment change.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Alert the user that a segment finished.
    fn play_notification(&self, transition: &Transition);
}

/// Terminal bell plus an optional desktop notification.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    sound: bool,
    desktop: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(sound: bool, desktop: bool) -> Self {
        Self { sound, desktop }
    }

    fn ring_bell() {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::warn!(error = %e, "failed to ring terminal bell");
        }
    }

    fn show_desktop(transition: &Transition) {
        let result = Notification::new()
            .summary("Focus Timer")
            .body(&notification_body(transition))
            .appname("focustimer")
            .icon("alarm-clock")
            .show();

        if let Err(e) = result {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }
}

impl Notifier for TerminalNotifier {
    fn play_notification(&self, transition: &Transition) {
        if self.sound {
            Self::ring_bell();
        }
        if self.desktop {
            Self::show_desktop(transition);
        }
    }
}

/// Does nothing. Used when every alert is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play_notification(&self, _transition: &Transition) {}
}

/// Pick a notifier for the given switches.
#[must_use]
pub fn notifier_for(sound: bool, desktop: bool) -> Box<dyn Notifier> {
    if sound || desktop {
        Box::new(TerminalNotifier::new(sound, desktop))
    } else {
        Box::new(SilentNotifier)
    }
}

/// Message shown when `transition` happens.
#[must_use]
pub fn notification_body(transition: &Transition) -> String {
    if transition.to.is_break() {
        format!(
            "Work session {} complete. Time for a {}.",
            transition.completed_work_sessions,
            transition.to.display_name().to_lowercase()
        )
    } else {
        format!("{} over. Back to work!", transition.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SessionMode;

    #[test]
    fn test_notification_body() {
        let to_break = Transition {
            from: SessionMode::Work,
            to: SessionMode::LongBreak,
            completed_work_sessions: 4,
        };
        assert_eq!(
            notification_body(&to_break),
            "Work session 4 complete. Time for a long break."
        );

        let to_work = Transition {
            from: SessionMode::ShortBreak,
            to: SessionMode::Work,
            completed_work_sessions: 1,
        };
        assert_eq!(notification_body(&to_work), "Short Break over. Back to work!");
    }

    #[test]
    fn test_silent_notifier_is_noop() {
        let transition = Transition {
            from: SessionMode::Work,
            to: SessionMode::ShortBreak,
            completed_work_sessions: 1,
        };
        SilentNotifier.play_notification(&transition);
    }
}

//! One-second tick cadence.
//!
//! The [`Ticker`] does not own a thread or a callback. The event loop asks it
//! whether a tick is due and how long it may sleep. Disarming takes effect
//! immediately, so a stopped counter never sees a stale tick.

use std::time::{Duration, Instant};

/// Default cadence of the tick driver.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A cancellable repeating deadline.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    /// Start a fresh cadence: the first tick is due one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_deadline = Some(now + self.interval);
    }

    /// Stop the cadence. No tick is reported until armed again.
    pub fn disarm(&mut self) {
        self.next_deadline = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Report whether a tick is due at `now`.
    ///
    /// At most one tick is reported per call. Missed ticks are dropped and the
    /// next deadline is measured from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_deadline {
            Some(deadline) if now >= deadline => {
                self.next_deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

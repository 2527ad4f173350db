//! Count-up stopwatch.

use crate::timer::format::format_stopwatch;

/// A stopwatch counting whole seconds while running.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    running: bool,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop counting, keeping the elapsed time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and zero the stopwatch.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_seconds = 0;
    }

    /// Advance by one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
            tracing::trace!(elapsed = self.elapsed_seconds, "stopwatch tick");
        }
    }

    /// Format elapsed time as MM:SS or H:MM:SS.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        format_stopwatch(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_ticks_while_running() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        for _ in 0..125 {
            stopwatch.tick();
        }
        assert_eq!(stopwatch.elapsed_seconds(), 125);
        assert_eq!(stopwatch.format_elapsed(), "02:05");
    }

    #[test]
    fn test_paused_ticks_are_ignored() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed_seconds(), 0);

        stopwatch.toggle();
        stopwatch.tick();
        stopwatch.toggle();
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed_seconds(), 1);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn test_pause_keeps_elapsed() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        stopwatch.tick();
        stopwatch.pause();
        stopwatch.pause();
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed_seconds(), 1);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn test_reset() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        for _ in 0..10 {
            stopwatch.tick();
        }
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_seconds(), 0);
        assert!(!stopwatch.is_running());
    }
}

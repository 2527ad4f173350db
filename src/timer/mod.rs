//! Timer logic: Pomodoro cycling, stopwatch, and the tick cadence.
//!
//! Nothing in here touches the terminal or the wall clock; callers feed
//! ticks in and read state out.

pub mod format;
pub mod session;
pub mod settings;
pub mod stopwatch;
pub mod ticker;

pub use format::{format_mmss, format_stopwatch, render_progress_bar};
pub use session::{PomodoroTimer, SessionMode, Transition, SESSIONS_PER_LONG_BREAK};
pub use settings::{parse_minutes, SettingKey, TimerSettings, MAX_MINUTES, MIN_MINUTES};
pub use stopwatch::Stopwatch;
pub use ticker::{Ticker, TICK_INTERVAL};

//! focustimer - A terminal Pomodoro timer, stopwatch and clock
//!
//! This crate provides the timer state machine, a controller that binds it to
//! a one-second ticker, and a ratatui front end with a small clap CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod appearance;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use controller::{Controller, Tab};
pub use error::FocusTimerError;
pub use timer::{PomodoroTimer, SessionMode, Stopwatch, TimerSettings};

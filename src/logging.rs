//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so while it runs logs go to a daily rotated
//! file. Every other command logs to stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Paths;
use crate::error::FocusTimerError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FOCUSTIMER_LOG";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr. A subscriber that is already installed stays in place.
pub fn init_stderr(default_level: &str) {
    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(default_level))
        .try_init()
    {
        tracing::debug!(error = %e, "stderr subscriber not installed; one is already set");
    }
}

/// Log to `logs/focustimer.log` under the data directory.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_file(paths: &Paths, default_level: &str) -> Result<WorkerGuard, FocusTimerError> {
    paths.ensure_dirs()?;
    let appender = tracing_appender::rolling::daily(&paths.logs, "focustimer.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter(default_level))
        .try_init()
    {
        tracing::debug!(error = %e, "file subscriber not installed; one is already set");
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        init_stderr("warn");
        init_stderr("debug");
        let guard = init_file(&paths, "info").unwrap();
        assert!(paths.logs.is_dir());
        drop(guard);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let filter = filter("not a level[");
        assert!(!filter.to_string().is_empty());
    }
}

//! Wall-clock display.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// A wall-clock reading formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    /// e.g. `Monday, January 1, 2024`.
    pub date: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

impl ClockReading {
    #[must_use]
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: format_clock_time(now),
            date: format_long_date(now),
            timestamp: now.to_rfc3339(),
        }
    }

    /// Read the local clock.
    #[must_use]
    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

/// Format as `HH:MM:SS`.
#[must_use]
pub fn format_clock_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Format as `HH:MM` for the header.
#[must_use]
pub fn format_header_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M").to_string()
}

/// Format as `Weekday, Month D, YYYY`.
#[must_use]
pub fn format_long_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_clock_reading() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 7).unwrap();
        let reading = ClockReading::at(&now);

        assert_eq!(reading.time, "09:05:07");
        assert_eq!(reading.date, "Monday, January 1, 2024");
        assert_eq!(reading.timestamp, "2024-01-01T09:05:07+00:00");
        assert_eq!(format_header_time(&now), "09:05");
    }
}

//! Trading session window.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for invalid trading-hours windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradingHoursError {
    /// Session start is after session end.
    #[error("Invalid trading hours: {start} > {end}")]
    InvalidRange {
        /// The session start.
        start: NaiveTime,
        /// The session end.
        end: NaiveTime,
    },

    /// A time of day could not be parsed.
    #[error("Invalid time of day '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
}

/// Inclusive time-of-day window in which trades are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingHours {
    /// Session open (inclusive).
    pub start: NaiveTime,
    /// Session close (inclusive).
    pub end: NaiveTime,
}

impl TradingHours {
    /// Creates a new window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, TradingHoursError> {
        if start > end {
            return Err(TradingHoursError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Regular US equity session, 09:30:00 to 16:00:00.
    #[must_use]
    pub fn regular() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
            end: NaiveTime::from_hms_opt(16, 0, 0).expect("valid time"),
        }
    }

    /// Returns true if the time of day falls inside the window.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time <= self.end
    }

    /// Returns true if the timestamp's time of day falls inside the window.
    #[must_use]
    pub fn contains_datetime(&self, timestamp: NaiveDateTime) -> bool {
        self.contains(timestamp.time())
    }
}

impl Default for TradingHours {
    fn default() -> Self {
        Self::regular()
    }
}

impl std::fmt::Display for TradingHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parses `HH:MM` or `HH:MM:SS` into a time of day.
///
/// # Errors
///
/// Returns an error if the string matches neither form.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, TradingHoursError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TradingHoursError::InvalidTime(s.to_string()))
}

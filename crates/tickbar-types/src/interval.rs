//! Bar interval parsing.
//!
//! Intervals are written as one or more `<digits><unit>` groups, where the
//! unit is one of `d`, `h`, `m` or `s`. `1h30m` is 5400 seconds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Errors returned when parsing an interval string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalParseError {
    /// A character that is neither a digit nor a known unit.
    #[error("invalid interval '{input}': unexpected character '{found}', expected digits or one of d, h, m, s")]
    UnknownUnit {
        /// The full input string.
        input: String,
        /// The offending character.
        found: char,
    },

    /// The total does not fit in 64 bits.
    #[error("invalid interval '{0}': duration overflows")]
    Overflow(String),

    /// The interval adds up to zero seconds.
    #[error("invalid interval '{0}': duration must be at least one second")]
    Zero(String),
}

/// Parses a compact duration string into total seconds.
///
/// Digits accumulate until a unit character is seen; the unit multiplies the
/// accumulated number and adds it to the total. A trailing run of digits with
/// no unit is dropped, and a unit with no digits before it adds nothing.
///
/// # Errors
///
/// Returns an error for characters outside `0-9dhms` or if the total
/// overflows.
pub fn parse_interval_seconds(input: &str) -> Result<u64, IntervalParseError> {
    let overflow = || IntervalParseError::Overflow(input.to_string());
    let mut total: u64 = 0;
    let mut number: u64 = 0;

    for c in input.chars() {
        if let Some(digit) = c.to_digit(10) {
            number = number
                .checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(digit)))
                .ok_or_else(overflow)?;
            continue;
        }

        let unit = match c {
            'd' => SECONDS_PER_DAY,
            'h' => SECONDS_PER_HOUR,
            'm' => SECONDS_PER_MINUTE,
            's' => 1,
            found => {
                return Err(IntervalParseError::UnknownUnit {
                    input: input.to_string(),
                    found,
                });
            }
        };

        total = number
            .checked_mul(unit)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(overflow)?;
        number = 0;
    }

    Ok(total)
}

/// A bar interval of at least one second.
///
/// Keeps the string it was parsed from so output files can be named after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    seconds: u64,
    label: String,
}

impl Interval {
    /// Creates an interval from a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is zero.
    pub fn from_seconds(seconds: u64) -> Result<Self, IntervalParseError> {
        if seconds == 0 {
            return Err(IntervalParseError::Zero("0s".to_string()));
        }
        Ok(Self {
            seconds,
            label: format!("{seconds}s"),
        })
    }

    /// Returns the interval length in seconds.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns the interval as a [`chrono::TimeDelta`].
    #[must_use]
    pub fn as_time_delta(&self) -> chrono::TimeDelta {
        i64::try_from(self.seconds)
            .ok()
            .and_then(chrono::TimeDelta::try_seconds)
            .unwrap_or(chrono::TimeDelta::MAX)
    }

    /// Returns the string the interval was parsed from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = parse_interval_seconds(s)?;
        if seconds == 0 {
            return Err(IntervalParseError::Zero(s.to_string()));
        }
        Ok(Self {
            seconds,
            label: s.to_string(),
        })
    }
}

//! Trade record representation.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// `strftime` pattern used when writing timestamps back out.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A trade row as read from an input file, before any validation.
///
/// Columns are matched by header name. A missing column or a short row leaves
/// the field empty; extra columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTrade {
    /// Trade time, expected as `YYYY-MM-DD HH:MM:SS.ffffff`.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
    /// Trade price.
    #[serde(rename = "Price", default)]
    pub price: String,
    /// Trade size.
    #[serde(rename = "Size", default)]
    pub size: String,
}

impl RawTrade {
    /// Creates a new raw trade.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        price: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            price: price.into(),
            size: size.into(),
        }
    }

    /// Returns true if every field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.timestamp.is_empty() && !self.price.is_empty() && !self.size.is_empty()
    }
}

/// A validated trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanTrade {
    /// Trade time.
    pub timestamp: NaiveDateTime,
    /// Trade price, never negative.
    pub price: f64,
    /// Trade size, never negative.
    pub size: i64,
}

impl CleanTrade {
    /// Creates a new clean trade.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, price: f64, size: i64) -> Self {
        Self {
            timestamp,
            price,
            size,
        }
    }
}

/// Parses a `YYYY-MM-DD HH:MM:SS.ffffff` timestamp.
///
/// The fractional part is required and may carry one to six digits.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (whole, fraction) = s.rsplit_once('.')?;
    if fraction.is_empty() || fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let base = NaiveDateTime::parse_from_str(whole, "%Y-%m-%d %H:%M:%S").ok()?;
    // Right-pad to microseconds: ".5" is 500_000us.
    let micros: i64 = format!("{fraction:0<6}").parse().ok()?;
    Some(base + TimeDelta::microseconds(micros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-01-01 09:30:00.123456").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123_456)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_parse_timestamp_short_fraction() {
        let ts = parse_timestamp("2024-01-01 09:30:00.5").unwrap();
        assert_eq!(ts.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_parse_timestamp_rejects_malformed() {
        assert!(parse_timestamp("2024-01-01 09:30:00").is_none());
        assert!(parse_timestamp("2024-01-01T09:30:00.000000").is_none());
        assert!(parse_timestamp("2024-01-01 09:30:00.1234567").is_none());
        assert!(parse_timestamp("2024-13-01 09:30:00.000000").is_none());
        assert!(parse_timestamp("not a timestamp").is_none());
        assert!(parse_timestamp("2024-01-01 09:30:00.abc").is_none());
    }

    #[test]
    fn test_timestamp_format_round_trip() {
        let raw = "2024-03-05 15:59:59.000120";
        let ts = parse_timestamp(raw).unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), raw);
    }

    #[test]
    fn test_raw_trade_completeness() {
        assert!(RawTrade::new("2024-01-01 09:30:00.000000", "1", "1").is_complete());
        assert!(!RawTrade::new("2024-01-01 09:30:00.000000", "", "1").is_complete());
        assert!(!RawTrade::default().is_complete());
    }
}

//! OHLCV (candlestick) data structure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// OHLCV bar (candlestick) data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    /// Timestamp of the first trade in the bar.
    pub timestamp: NaiveDateTime,
    /// Opening price (first trade's price).
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price (last trade's price).
    pub close: f64,
    /// Total traded size.
    pub volume: i64,
    /// Number of trades in the bar.
    pub trade_count: u32,
}

impl Ohlcv {
    /// Creates a new OHLCV bar.
    #[must_use]
    pub const fn new(
        timestamp: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: i64,
        trade_count: u32,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            trade_count,
        }
    }
}

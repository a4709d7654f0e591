//! Cleaner configuration.

use serde::{Deserialize, Serialize};
use tickbar_types::TradingHours;

/// Configuration for [`TradeCleaner`](crate::TradeCleaner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Inclusive time-of-day window for accepted trades.
    pub trading_hours: TradingHours,
    /// Number of recent accepted prices the outlier median is taken over.
    /// Zero disables the outlier check.
    pub outlier_window: usize,
    /// Prices strictly below this fraction of the rolling median are outliers.
    pub outlier_min_ratio: f64,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            trading_hours: TradingHours::regular(),
            outlier_window: 50,
            outlier_min_ratio: 0.1,
        }
    }
}

impl CleanerConfig {
    /// Sets the trading-hours window.
    #[must_use]
    pub const fn with_trading_hours(mut self, trading_hours: TradingHours) -> Self {
        self.trading_hours = trading_hours;
        self
    }

    /// Sets the outlier window size.
    #[must_use]
    pub const fn with_outlier_window(mut self, window: usize) -> Self {
        self.outlier_window = window;
        self
    }

    /// Sets the outlier ratio.
    #[must_use]
    pub const fn with_outlier_min_ratio(mut self, ratio: f64) -> Self {
        self.outlier_min_ratio = ratio;
        self
    }
}

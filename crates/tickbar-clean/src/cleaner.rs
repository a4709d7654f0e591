//! Ordered validation of raw trades.

use std::collections::HashSet;
use tickbar_ingest::TradeBuffer;
use tickbar_types::{CleanTrade, RawTrade, parse_timestamp};

use crate::{CleanerConfig, OutlierFilter};

/// Reason a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Timestamp, price or size was empty.
    MissingField,
    /// Timestamp did not match `YYYY-MM-DD HH:MM:SS.ffffff`.
    InvalidTimestamp,
    /// Time of day outside the trading window.
    OutsideTradingHours,
    /// Timestamp already seen earlier in the run.
    Duplicate,
    /// Price or size is not a number.
    InvalidNumber,
    /// Price or size is negative.
    Negative,
    /// Price far below the rolling median.
    Outlier,
}

impl Rejection {
    /// Returns the rejection reason as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::OutsideTradingHours => "outside_trading_hours",
            Self::Duplicate => "duplicate",
            Self::InvalidNumber => "invalid_number",
            Self::Negative => "negative",
            Self::Outlier => "outlier",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row counts from one or more cleaning passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Rows examined.
    pub total: usize,
    /// Rows kept.
    pub accepted: usize,
    /// Rows with an empty field.
    pub missing_field: usize,
    /// Rows with an unparseable timestamp.
    pub invalid_timestamp: usize,
    /// Rows outside the trading window.
    pub outside_trading_hours: usize,
    /// Rows repeating an earlier timestamp.
    pub duplicate: usize,
    /// Rows with a non-numeric price or size.
    pub invalid_number: usize,
    /// Rows with a negative price or size.
    pub negative: usize,
    /// Rows rejected by the outlier filter.
    pub outlier: usize,
}

impl CleanStats {
    /// Records a rejected row.
    pub const fn record(&mut self, rejection: Rejection) {
        self.total += 1;
        match rejection {
            Rejection::MissingField => self.missing_field += 1,
            Rejection::InvalidTimestamp => self.invalid_timestamp += 1,
            Rejection::OutsideTradingHours => self.outside_trading_hours += 1,
            Rejection::Duplicate => self.duplicate += 1,
            Rejection::InvalidNumber => self.invalid_number += 1,
            Rejection::Negative => self.negative += 1,
            Rejection::Outlier => self.outlier += 1,
        }
    }

    /// Records a kept row.
    pub const fn record_accepted(&mut self) {
        self.total += 1;
        self.accepted += 1;
    }

    /// Returns the number of dropped rows.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.total - self.accepted
    }
}

/// Result of a cleaning pass.
#[derive(Debug, Clone, Default)]
pub struct CleanOutput {
    /// Kept trades, in the order they were drained.
    pub trades: Vec<CleanTrade>,
    /// Counts for this pass.
    pub stats: CleanStats,
}

/// Validates raw trades against a fixed sequence of checks.
///
/// Rows are checked in this order, and the first failing check drops the row:
/// completeness, timestamp format, trading hours, duplicate timestamp,
/// numeric validity, outlier. Duplicate tracking and the outlier history
/// persist across calls on the same cleaner.
#[derive(Debug)]
pub struct TradeCleaner {
    config: CleanerConfig,
    seen_timestamps: HashSet<String>,
    outliers: OutlierFilter,
}

impl TradeCleaner {
    /// Creates a cleaner with the given configuration.
    #[must_use]
    pub fn new(config: CleanerConfig) -> Self {
        Self {
            config,
            seen_timestamps: HashSet::new(),
            outliers: OutlierFilter::new(config.outlier_window, config.outlier_min_ratio),
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Drains the buffer and returns the rows that pass every check.
    ///
    /// The buffer is empty when this returns.
    pub fn clean(&mut self, buffer: &mut TradeBuffer) -> CleanOutput {
        self.clean_rows(buffer.drain())
    }

    /// Cleans rows from any source, preserving their order.
    pub fn clean_rows(&mut self, rows: impl IntoIterator<Item = RawTrade>) -> CleanOutput {
        let mut output = CleanOutput::default();

        for raw in rows {
            match self.validate(raw) {
                Ok(trade) => {
                    output.stats.record_accepted();
                    output.trades.push(trade);
                }
                Err(rejection) => output.stats.record(rejection),
            }
        }

        let stats = output.stats;
        tracing::info!(
            total = stats.total,
            accepted = stats.accepted,
            missing_field = stats.missing_field,
            invalid_timestamp = stats.invalid_timestamp,
            outside_trading_hours = stats.outside_trading_hours,
            duplicate = stats.duplicate,
            invalid_number = stats.invalid_number,
            negative = stats.negative,
            outlier = stats.outlier,
            "cleaned data"
        );

        output
    }

    /// Runs every check on one row.
    ///
    /// # Errors
    ///
    /// Returns the first check the row fails.
    pub fn validate(&mut self, raw: RawTrade) -> Result<CleanTrade, Rejection> {
        if !raw.is_complete() {
            return Err(Rejection::MissingField);
        }

        let Some(timestamp) = parse_timestamp(&raw.timestamp) else {
            tracing::warn!(timestamp = %raw.timestamp, "invalid timestamp format");
            return Err(Rejection::InvalidTimestamp);
        };

        if !self.config.trading_hours.contains_datetime(timestamp) {
            return Err(Rejection::OutsideTradingHours);
        }

        // The key is claimed here even if a later check drops the row.
        if self.seen_timestamps.contains(&raw.timestamp) {
            tracing::debug!(timestamp = %raw.timestamp, "duplicate timestamp");
            return Err(Rejection::Duplicate);
        }
        self.seen_timestamps.insert(raw.timestamp);

        let (Ok(price), Ok(size)) = (
            raw.price.trim().parse::<f64>(),
            raw.size.trim().parse::<i64>(),
        ) else {
            return Err(Rejection::InvalidNumber);
        };
        if !price.is_finite() {
            return Err(Rejection::InvalidNumber);
        }
        if price < 0.0 || size < 0 {
            return Err(Rejection::Negative);
        }

        if let Err(median) = self.outliers.check(price) {
            tracing::warn!(%timestamp, price, median, "outlier price");
            return Err(Rejection::Outlier);
        }

        Ok(CleanTrade::new(timestamp, price, size))
    }
}

impl Default for TradeCleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}

//! Core types for the tickbar trade-to-OHLCV pipeline.
//!
//! This crate provides the fundamental data structures used throughout tickbar:
//!
//! - [`RawTrade`] - An untyped trade row exactly as read from an input file
//! - [`CleanTrade`] - A validated trade with parsed timestamp, price, and size
//! - [`Interval`] - Bar duration parsed from compact strings such as `1h30m`
//! - [`TradingHours`] - Inclusive time-of-day window for accepted trades

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod interval;
mod trade;
mod trading_hours;

pub use error::{Result, TickbarError};
pub use interval::{Interval, IntervalParseError, parse_interval_seconds};
pub use trade::{CleanTrade, RawTrade, TIMESTAMP_FORMAT, parse_timestamp};
pub use trading_hours::{TradingHours, TradingHoursError, parse_time_of_day};

//! OHLCV aggregation for the tickbar pipeline.
//!
//! This crate provides trade-to-OHLCV (candlestick) aggregation:
//!
//! - [`Ohlcv`] - OHLCV bar data structure
//! - [`TradeAggregator`] - Streaming trade aggregator
//! - [`aggregate_trades`] - Sorts a trade set and aggregates it in one call

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod ohlcv;

pub use aggregator::{TradeAggregator, aggregate_trades};
pub use ohlcv::Ohlcv;

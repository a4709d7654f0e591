//! Concurrent trade ingestion, cleaning, and OHLCV aggregation.
//!
//! This is a facade crate that re-exports functionality from the tickbar
//! workspace crates and wires them into a [`Pipeline`].
//!
//! # Quick Start
//!
//! ```ignore
//! use tickbar_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cleaned = Pipeline::new("data").load().await?;
//!
//!     let interval: Interval = "1h30m".parse()?;
//!     let bars = cleaned.aggregate(&interval);
//!     println!("Generated {} bars", bars.len());
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "full")]
mod pipeline;

// Re-export core types
pub use tickbar_types::*;

// Re-export ingestion
#[cfg(feature = "ingest")]
pub use tickbar_ingest::{
    IngestError, IngestSummary, TradeBatch, TradeBuffer, discover_files, ingest_dir, ingest_files,
    load_file, trade_batches,
};

// Re-export cleaning
#[cfg(feature = "clean")]
pub use tickbar_clean::{CleanOutput, CleanStats, CleanerConfig, OutlierFilter, Rejection, TradeCleaner};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use tickbar_aggregate::{Ohlcv, TradeAggregator, aggregate_trades};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickbar_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat,
    write_ohlcv_file, write_trades_file,
};

#[cfg(feature = "full")]
pub use pipeline::{CleanedTrades, Pipeline, write_bars};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbar_types::{
        CleanTrade, Interval, RawTrade, Result, TickbarError, TradingHours,
    };

    #[cfg(feature = "ingest")]
    pub use tickbar_ingest::{TradeBatch, TradeBuffer, ingest_dir, trade_batches};

    #[cfg(feature = "clean")]
    pub use tickbar_clean::{CleanStats, CleanerConfig, TradeCleaner};

    #[cfg(feature = "aggregate")]
    pub use tickbar_aggregate::{Ohlcv, TradeAggregator, aggregate_trades};

    #[cfg(feature = "format")]
    pub use tickbar_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "full")]
    pub use crate::pipeline::{CleanedTrades, Pipeline, write_bars};
}

//! Trade validation and outlier filtering for the tickbar pipeline.
//!
//! This crate turns raw rows into validated trades:
//!
//! - [`CleanerConfig`] - Trading hours and outlier thresholds
//! - [`TradeCleaner`] - Ordered validation checks over a drained buffer
//! - [`OutlierFilter`] - Rolling-median rejection of anomalously low prices
//! - [`CleanStats`] - Per-reason rejection counts

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cleaner;
mod config;
mod outlier;

pub use cleaner::{CleanOutput, CleanStats, Rejection, TradeCleaner};
pub use config::CleanerConfig;
pub use outlier::OutlierFilter;

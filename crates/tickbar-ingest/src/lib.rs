//! Concurrent trade file ingestion for the tickbar pipeline.
//!
//! This crate provides the loading stage of the pipeline:
//!
//! - [`load_file`] - Reads one delimited file into a [`TradeBatch`]
//! - [`trade_batches`] - One worker task per file, yielded as they finish
//! - [`ingest_files`] - Runs the workers and waits for every one of them
//! - [`ingest_dir`] - Discovers and loads a whole directory
//! - [`TradeBuffer`] - The merged rows handed to the cleaning stage

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod buffer;
mod loader;
mod stream;

pub use buffer::{IngestSummary, TradeBuffer};
pub use loader::{IngestError, TradeBatch, load_file};
pub use stream::{discover_files, ingest_dir, ingest_files, trade_batches};

//! Output formatters for the tickbar pipeline.
//!
//! This crate provides formatters for writing cleaned trades and OHLCV bars:
//!
//! - [`CsvFormatter`] - Delimited text with a header row
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`write_ohlcv_file`] - Creates or overwrites an output file

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod file;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use file::{write_ohlcv_file, write_trades_file};
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;

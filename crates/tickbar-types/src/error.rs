//! Error types for tickbar.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tickbar operations.
pub type Result<T> = std::result::Result<T, TickbarError>;

/// Errors that can occur while running the pipeline.
#[derive(Error, Debug)]
pub enum TickbarError {
    /// The input directory could not be listed.
    #[error("Cannot read input directory '{path}': {source}")]
    InputDir {
        /// The directory that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),
}

//! Per-file trade loading.

use futures::StreamExt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tickbar_types::RawTrade;

/// Columns every input file is expected to carry.
const REQUIRED_COLUMNS: [&str; 3] = ["Timestamp", "Price", "Size"];

/// Errors that can stop a single file from loading.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file could not be opened.
    #[error("Failed to open '{path}': {source}")]
    Open {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A record could not be read or decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// The worker task panicked or was cancelled.
    #[error("Worker failed: {0}")]
    Worker(String),
}

/// The rows one worker read from one file.
#[derive(Debug)]
pub struct TradeBatch {
    /// The file the rows came from.
    pub source: PathBuf,
    /// The rows read before the file ended or failed.
    pub trades: Vec<RawTrade>,
    /// The error that stopped the worker, if any.
    pub error: Option<IngestError>,
}

impl TradeBatch {
    /// Creates a batch for a file that was read to the end.
    #[must_use]
    pub const fn new(source: PathBuf, trades: Vec<RawTrade>) -> Self {
        Self {
            source,
            trades,
            error: None,
        }
    }

    /// Creates a batch for a file that failed part way through.
    ///
    /// Rows read before the failure are kept.
    #[must_use]
    pub const fn failed(source: PathBuf, trades: Vec<RawTrade>, error: IngestError) -> Self {
        Self {
            source,
            trades,
            error: Some(error),
        }
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Returns the number of rows in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns true if the worker stopped on an error.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Loads every row of a header-driven delimited file.
///
/// Never fails: an I/O or decode error ends the read, is logged, and is
/// recorded on the returned batch together with the rows read so far.
pub async fn load_file(path: PathBuf) -> TradeBatch {
    let mut trades = Vec::new();

    match read_trades(&path, &mut trades).await {
        Ok(()) => {
            tracing::debug!(file = %path.display(), rows = trades.len(), "loaded file");
            TradeBatch::new(path, trades)
        }
        Err(error) => {
            tracing::warn!(
                file = %path.display(),
                rows = trades.len(),
                %error,
                "error loading file"
            );
            TradeBatch::failed(path, trades, error)
        }
    }
}

/// Streams records from `path` into `trades` until EOF or the first error.
async fn read_trades(path: &Path, trades: &mut Vec<RawTrade>) -> Result<(), IngestError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    // Short rows are kept and surface as empty fields.
    let mut reader = csv_async::AsyncReaderBuilder::new()
        .flexible(true)
        .create_deserializer(file);
    let headers = reader.headers().await?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(file = %path.display(), ?missing, "file is missing required columns");
    }

    let mut records = reader.deserialize::<RawTrade>();

    while let Some(record) = records.next().await {
        trades.push(record?);
    }

    Ok(())
}

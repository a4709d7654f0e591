//! End-to-end pipeline: ingest a directory, clean it, aggregate and write bars.

use std::path::{Path, PathBuf};
use tickbar_aggregate::{Ohlcv, aggregate_trades};
use tickbar_clean::{CleanStats, CleanerConfig, TradeCleaner};
use tickbar_format::{FormatError, OutputFormat, write_ohlcv_file, write_trades_file};
use tickbar_ingest::{IngestSummary, TradeBatch, TradeBuffer, discover_files, ingest_files};
use tickbar_types::{CleanTrade, Interval, Result, TickbarError};

/// Ingestion and cleaning settings for one input directory.
#[derive(Debug, Clone)]
pub struct Pipeline {
    data_dir: PathBuf,
    config: CleanerConfig,
}

impl Pipeline {
    /// Creates a pipeline over `data_dir` with the default cleaning rules.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: CleanerConfig::default(),
        }
    }

    /// Replaces the cleaning rules.
    #[must_use]
    pub const fn with_cleaner_config(mut self, config: CleanerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the input directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the cleaning rules.
    #[must_use]
    pub const fn cleaner_config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Lists the files a worker will be started for.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory cannot be listed.
    pub async fn discover(&self) -> Result<Vec<PathBuf>> {
        discover_files(&self.data_dir).await
    }

    /// Loads every input file concurrently, calling `on_batch` as each one
    /// finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory cannot be listed.
    pub async fn ingest_with<F>(&self, on_batch: F) -> Result<TradeBuffer>
    where
        F: FnMut(&TradeBatch),
    {
        let files = self.discover().await?;
        Ok(ingest_files(files, on_batch).await)
    }

    /// Loads every input file concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory cannot be listed.
    pub async fn ingest(&self) -> Result<TradeBuffer> {
        self.ingest_with(|_| {}).await
    }

    /// Drains `buffer` through a fresh cleaner.
    #[must_use]
    pub fn clean(&self, buffer: &mut TradeBuffer) -> CleanedTrades {
        let ingest = buffer.summary();
        let output = TradeCleaner::new(self.config).clean(buffer);

        CleanedTrades {
            trades: output.trades,
            ingest,
            stats: output.stats,
        }
    }

    /// Ingests and cleans in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory cannot be listed.
    pub async fn load(&self) -> Result<CleanedTrades> {
        let mut buffer = self.ingest().await?;
        Ok(self.clean(&mut buffer))
    }
}

/// Trades that survived cleaning, with the counts from both stages.
#[derive(Debug, Clone, Default)]
pub struct CleanedTrades {
    /// Cleaned trades in drain order until the first aggregation, then sorted.
    pub trades: Vec<CleanTrade>,
    /// Ingestion counts.
    pub ingest: IngestSummary,
    /// Cleaning counts.
    pub stats: CleanStats,
}

impl CleanedTrades {
    /// Returns the number of cleaned trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns true if no trade survived cleaning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Builds bars for `interval`.
    ///
    /// Sorts the trades in place, so repeated calls with other intervals
    /// reuse the sorted order.
    pub fn aggregate(&mut self, interval: &Interval) -> Vec<Ohlcv> {
        aggregate_trades(&mut self.trades, interval)
    }

    /// Writes the cleaned trades to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write(&self, path: &Path, format: OutputFormat) -> Result<()> {
        write_trades_file(&self.trades, path, format).map_err(format_error)?;
        tracing::info!(path = %path.display(), trades = self.trades.len(), "wrote cleaned trades");
        Ok(())
    }
}

/// Writes bars to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_bars(bars: &[Ohlcv], path: &Path, format: OutputFormat) -> Result<()> {
    write_ohlcv_file(bars, path, format).map_err(format_error)?;
    tracing::info!(path = %path.display(), bars = bars.len(), "wrote bars");
    Ok(())
}

fn format_error(e: FormatError) -> TickbarError {
    match e {
        FormatError::Io(e) => TickbarError::Io(e),
        other => TickbarError::Format(other.to_string()),
    }
}

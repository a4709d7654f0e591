//! Merged trade buffer handed from ingestion to cleaning.
//!
//! Workers never share this buffer: each one fills its own [`TradeBatch`] and
//! the batches are merged here after every worker has finished.

use tickbar_types::RawTrade;

use crate::TradeBatch;

/// Counts gathered while merging worker batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Number of files a worker was started for.
    pub files: usize,
    /// Number of files whose worker stopped on an error.
    pub failed_files: usize,
    /// Total rows read across all files.
    pub rows: usize,
}

/// Raw trades from every input file, in merge order.
#[derive(Debug, Default)]
pub struct TradeBuffer {
    trades: Vec<RawTrade>,
    summary: IngestSummary,
}

impl TradeBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trades: Vec::new(),
            summary: IngestSummary {
                files: 0,
                failed_files: 0,
                rows: 0,
            },
        }
    }

    /// Merges completed batches, ordered by source path.
    ///
    /// Sorting makes the drain order independent of which worker finished
    /// first.
    #[must_use]
    pub fn from_batches(mut batches: Vec<TradeBatch>) -> Self {
        batches.sort_by(|a, b| a.source.cmp(&b.source));
        let mut buffer = Self::new();
        for batch in batches {
            buffer.push_batch(batch);
        }
        buffer
    }

    /// Appends one worker's rows.
    pub fn push_batch(&mut self, batch: TradeBatch) {
        self.summary.files += 1;
        if batch.had_error() {
            self.summary.failed_files += 1;
        }
        self.summary.rows += batch.len();
        self.trades.extend(batch.trades);
    }

    /// Returns the number of rows still in the buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns true if the buffer holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Returns the ingestion counts.
    #[must_use]
    pub const fn summary(&self) -> IngestSummary {
        self.summary
    }

    /// Removes and yields every row; the buffer is empty afterwards.
    pub fn drain(&mut self) -> std::vec::Drain<'_, RawTrade> {
        self.trades.drain(..)
    }
}

impl From<Vec<RawTrade>> for TradeBuffer {
    fn from(trades: Vec<RawTrade>) -> Self {
        let rows = trades.len();
        Self {
            trades,
            summary: IngestSummary {
                files: 0,
                failed_files: 0,
                rows,
            },
        }
    }
}

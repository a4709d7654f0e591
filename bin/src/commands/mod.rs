//! CLI command implementations.

pub(crate) mod aggregate;
pub(crate) mod clean;
pub(crate) mod interval;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tickbar_lib::prelude::*;
use tickbar_lib::{ingest_files, parse_time_of_day};

use crate::display::ingest_progress;

/// Flags that override the default cleaning rules.
#[derive(Args, Debug, Clone)]
pub(crate) struct CleanerArgs {
    /// Session open, inclusive (HH:MM or HH:MM:SS)
    #[arg(long, default_value = "09:30:00")]
    session_start: String,

    /// Session close, inclusive (HH:MM or HH:MM:SS)
    #[arg(long, default_value = "16:00:00")]
    session_end: String,

    /// Number of recent prices the outlier median looks at (0 disables)
    #[arg(long, default_value_t = 50)]
    outlier_window: usize,

    /// Minimum price as a fraction of the recent median
    #[arg(long, default_value_t = 0.1)]
    outlier_ratio: f64,
}

impl CleanerArgs {
    /// Builds the cleaner configuration from the flags.
    pub(crate) fn to_config(&self) -> Result<CleanerConfig> {
        let start = parse_time_of_day(&self.session_start)?;
        let end = parse_time_of_day(&self.session_end)?;
        let hours = TradingHours::new(start, end)?;

        Ok(CleanerConfig::default()
            .with_trading_hours(hours)
            .with_outlier_window(self.outlier_window)
            .with_outlier_min_ratio(self.outlier_ratio))
    }
}

/// Runs ingestion and cleaning with a per-file progress bar.
pub(crate) async fn load_cleaned(
    data_dir: PathBuf,
    cleaner: &CleanerArgs,
    quiet: bool,
) -> Result<CleanedTrades> {
    let pipeline = Pipeline::new(data_dir).with_cleaner_config(cleaner.to_config()?);

    let files = pipeline
        .discover()
        .await
        .with_context(|| format!("Failed to list {}", pipeline.data_dir().display()))?;

    let progress = ingest_progress(files.len() as u64, quiet);
    let mut failed = 0usize;
    let mut buffer = ingest_files(files, |batch| {
        if batch.had_error() {
            failed += 1;
        }
        progress.inc(1);
    })
    .await;

    let finish_msg = if failed > 0 {
        format!("Loaded {} rows ({failed} files failed)", buffer.len())
    } else {
        format!("Loaded {} rows", buffer.len())
    };
    progress.finish_with_message(finish_msg);

    Ok(pipeline.clean(&mut buffer))
}

//! Display utilities and output formatting for the tickbar CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

/// Output format for written files.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) fn extension(self) -> &'static str {
        OutputFormat::from(self).extension()
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Default bar file name for an interval, e.g. `1h30mintervaloutput.csv`.
pub(crate) fn default_bar_path(dir: &Path, interval: &Interval, format: Format) -> PathBuf {
    dir.join(format!("{}intervaloutput.{}", interval.label(), format.extension()))
}

/// Progress bar over ingested files, hidden in quiet mode.
#[allow(clippy::expect_used)]
pub(crate) fn ingest_progress(files: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(files);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .expect("Invalid progress template")
            .progress_chars("=>-"),
    );
    pb
}

/// Prints ingestion and cleaning counts.
pub(crate) fn print_clean_summary(cleaned: &CleanedTrades) {
    let ingest = cleaned.ingest;
    let stats = cleaned.stats;

    println!(
        "Files: {} ({} failed), rows: {}",
        ingest.files, ingest.failed_files, ingest.rows
    );
    println!("Kept {} of {} rows", stats.accepted, stats.total);

    let reasons = [
        ("missing field", stats.missing_field),
        ("invalid timestamp", stats.invalid_timestamp),
        ("outside trading hours", stats.outside_trading_hours),
        ("duplicate timestamp", stats.duplicate),
        ("invalid number", stats.invalid_number),
        ("negative value", stats.negative),
        ("outlier", stats.outlier),
    ];
    for (reason, count) in reasons.iter().filter(|(_, count)| *count > 0) {
        println!("  {reason:<22} {count:>10}");
    }
}

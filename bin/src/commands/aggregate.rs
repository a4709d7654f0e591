//! Aggregate command implementation.
//!
//! Runs ingestion and cleaning once, then writes one bar file per interval.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;
use tickbar_lib::write_bars;

use super::{CleanerArgs, load_cleaned};
use crate::display::{Format, default_bar_path, print_clean_summary};

/// Parses every interval argument before any work starts.
fn parse_intervals(specs: &[String]) -> Result<Vec<Interval>> {
    specs
        .iter()
        .map(|spec| {
            spec.parse::<Interval>()
                .with_context(|| format!("Invalid interval: {spec}"))
        })
        .collect()
}

/// Ingest, clean, and aggregate trades into one output per interval.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn aggregate(
    data_dir: PathBuf,
    interval_specs: &[String],
    output: Option<PathBuf>,
    output_dir: &Path,
    format: Format,
    cleaner: &CleanerArgs,
    quiet: bool,
) -> Result<()> {
    let intervals = parse_intervals(interval_specs)?;
    if output.is_some() && intervals.len() > 1 {
        bail!("--output takes a single interval; use --output-dir for several");
    }

    let mut cleaned = load_cleaned(data_dir, cleaner, quiet).await?;
    if !quiet {
        print_clean_summary(&cleaned);
    }

    for interval in &intervals {
        let bars = cleaned.aggregate(interval);
        let path = output
            .clone()
            .unwrap_or_else(|| default_bar_path(output_dir, interval, format));

        write_bars(&bars, &path, format.into())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if !quiet {
            println!(
                "{} bars ({}s) written to: {}",
                bars.len(),
                interval.seconds(),
                path.display()
            );
        }
    }

    Ok(())
}

//! Clean command implementation.

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{CleanerArgs, load_cleaned};
use crate::display::{Format, print_clean_summary};

/// Ingest and clean trades, writing the surviving rows.
pub(crate) async fn clean(
    data_dir: PathBuf,
    output: Option<PathBuf>,
    format: Format,
    cleaner: &CleanerArgs,
    quiet: bool,
) -> Result<()> {
    let cleaned = load_cleaned(data_dir, cleaner, quiet).await?;
    if !quiet {
        print_clean_summary(&cleaned);
    }

    // Determine output path (default to cleaned.<format>)
    let output = output.unwrap_or_else(|| PathBuf::from(format!("cleaned.{}", format.extension())));

    cleaned
        .write(&output, format.into())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}

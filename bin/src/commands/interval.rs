//! Interval command implementation.

use anyhow::{Context, Result};
use tickbar_lib::prelude::*;

/// Print the number of seconds each interval string stands for.
pub(crate) fn show_intervals(specs: &[String]) -> Result<()> {
    for spec in specs {
        let interval: Interval = spec
            .parse()
            .with_context(|| format!("Invalid interval: {spec}"))?;
        println!("{:<12} {:>10}s", interval.label(), interval.seconds());
    }
    Ok(())
}

//! Writing formatted output to files.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tickbar_aggregate::Ohlcv;
use tickbar_types::CleanTrade;

use crate::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

fn create(path: &Path) -> Result<BufWriter<File>, FormatError> {
    let file = File::create(path).map_err(|source| FormatError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Writes OHLCV bars to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_ohlcv_file(
    bars: &[Ohlcv],
    path: &Path,
    format: OutputFormat,
) -> Result<(), FormatError> {
    let writer = create(path)?;

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_ohlcv(bars, writer),
        OutputFormat::Json => JsonFormatter::new().write_ohlcv(bars, writer),
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_ohlcv(bars, writer),
    }
}

/// Writes cleaned trades to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_trades_file(
    trades: &[CleanTrade],
    path: &Path,
    format: OutputFormat,
) -> Result<(), FormatError> {
    let writer = create(path)?;

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_trades(trades, writer),
        OutputFormat::Json => JsonFormatter::new().write_trades(trades, writer),
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_trades(trades, writer),
    }
}

//! CSV output format.

use std::io::Write;
use tickbar_aggregate::Ohlcv;
use tickbar_types::{CleanTrade, TIMESTAMP_FORMAT};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Always writes a header row. Prices are written in shortest round-trip form
/// with a trailing `.0` on whole numbers (`100.0`, `102.5`); sizes and volumes
/// as plain integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn write_trades<W: Write + Send>(
        &self,
        trades: &[CleanTrade],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "Timestamp,Price,Size")?;

        for trade in trades {
            writeln!(
                writer,
                "{},{:?},{}",
                trade.timestamp.format(TIMESTAMP_FORMAT),
                trade.price,
                trade.size
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_ohlcv<W: Write + Send>(
        &self,
        bars: &[Ohlcv],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "Timestamp,Open,High,Low,Close,Volume")?;

        for bar in bars {
            writeln!(
                writer,
                "{},{:?},{:?},{:?},{:?},{}",
                bar.timestamp.format(TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

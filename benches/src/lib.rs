//! Synthetic trade data for tickbar benchmarks.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::Path;
use tickbar_lib::{CleanTrade, RawTrade, TIMESTAMP_FORMAT};

/// Shape of a generated trade session.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticConfig {
    /// Number of trades to generate.
    pub trades: usize,
    /// Milliseconds between consecutive trades.
    pub step_millis: i64,
    /// Starting price.
    pub base_price: f64,
    /// Seed for the price walk.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            trades: 100_000,
            step_millis: 200,
            base_price: 100.0,
            seed: 0x5eed,
        }
    }
}

fn session_open() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

/// Generates cleaned trades on a random walk starting at the session open.
///
/// Timestamps are strictly increasing and wrap onto following days once the
/// session closes, so every trade is inside regular trading hours.
pub fn generate_trades(config: &SyntheticConfig) -> Vec<CleanTrade> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let session_millis = 6 * 3_600_000 + 30 * 60_000;
    let open = session_open();
    let mut price = config.base_price;

    (0..config.trades)
        .map(|i| {
            let offset = i as i64 * config.step_millis;
            let day = offset / session_millis;
            let timestamp = open
                + TimeDelta::days(day)
                + TimeDelta::milliseconds(offset % session_millis);

            price = (price * (1.0 + rng.gen_range(-1.0_f64..1.0) * 0.001)).max(0.01);
            let size: i64 = rng.gen_range(1..=500);
            CleanTrade::new(timestamp, price, size)
        })
        .collect()
}

/// Generates the same session as raw string rows.
pub fn generate_raw_trades(config: &SyntheticConfig) -> Vec<RawTrade> {
    generate_trades(config)
        .into_iter()
        .map(|t| {
            RawTrade::new(
                t.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                format!("{:.4}", t.price),
                t.size.to_string(),
            )
        })
        .collect()
}

/// Writes the generated rows across `files` CSV files in `dir`.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_trade_dir(dir: &Path, files: usize, config: &SyntheticConfig) -> std::io::Result<()> {
    let rows = generate_raw_trades(config);
    let per_file = rows.len().div_ceil(files.max(1)).max(1);

    for (i, chunk) in rows.chunks(per_file).enumerate() {
        let file = std::fs::File::create(dir.join(format!("trades_{i:03}.csv")))?;
        let mut writer = std::io::BufWriter::new(file);
        writeln!(writer, "Timestamp,Price,Size")?;
        for row in chunk {
            writeln!(writer, "{},{},{}", row.timestamp, row.price, row.size)?;
        }
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_trades_are_increasing() {
        let config = SyntheticConfig {
            trades: 1_000,
            step_millis: 60_000,
            ..Default::default()
        };
        let trades = generate_trades(&config);

        assert_eq!(trades.len(), 1_000);
        assert!(trades.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert!(trades.iter().all(|t| t.price > 0.0 && t.size > 0));
    }

    #[test]
    fn test_same_seed_same_session() {
        let config = SyntheticConfig {
            trades: 200,
            ..Default::default()
        };
        let other_seed = SyntheticConfig { seed: 7, ..config };

        assert_eq!(generate_trades(&config), generate_trades(&config));
        assert_ne!(generate_trades(&config), generate_trades(&other_seed));
    }

    #[test]
    fn test_write_trade_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SyntheticConfig {
            trades: 10,
            ..Default::default()
        };

        write_trade_dir(dir.path(), 3, &config).unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }
}

//! Streaming trade-to-OHLCV aggregation.

use chrono::{NaiveDateTime, TimeDelta};
use tickbar_types::{CleanTrade, Interval};

use crate::Ohlcv;

/// Streaming trade aggregator.
///
/// Buckets are anchored on the trade that opens them, not on clock
/// boundaries: a bucket opened at 09:31:17 with a one-hour interval takes
/// every trade before 10:31:17. Trades must arrive in chronological order.
#[derive(Debug)]
pub struct TradeAggregator {
    interval: Interval,
    span: TimeDelta,
    current_bar: Option<OhlcvBuilder>,
}

impl TradeAggregator {
    /// Creates a new aggregator for the given interval.
    #[must_use]
    pub fn new(interval: Interval) -> Self {
        let span = interval.as_time_delta();
        Self {
            interval,
            span,
            current_bar: None,
        }
    }

    /// Returns the interval being aggregated to.
    #[must_use]
    pub const fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Processes a trade, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when this trade falls at least one interval after
    /// the current bucket's first trade, `None` otherwise.
    pub fn process(&mut self, trade: CleanTrade) -> Option<Ohlcv> {
        match self.current_bar.take() {
            Some(mut builder) if trade.timestamp - builder.timestamp < self.span => {
                builder.update(&trade);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = builder.finish();
                self.current_bar = Some(OhlcvBuilder::new(&trade));
                Some(completed)
            }
            None => {
                self.current_bar = Some(OhlcvBuilder::new(&trade));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial bar.
    #[must_use]
    pub fn finish(self) -> Option<Ohlcv> {
        self.current_bar.map(OhlcvBuilder::finish)
    }
}

/// Sorts trades chronologically and aggregates them into bars.
///
/// The sort key is the parsed instant, not the source timestamp text. The
/// sort is stable, so trades at the same instant keep their drain order even
/// when their text differs (`09:30:00.5` and `09:30:00.500000`). Sorting the
/// text instead would put the shorter form first.
#[must_use]
pub fn aggregate_trades(trades: &mut [CleanTrade], interval: &Interval) -> Vec<Ohlcv> {
    trades.sort_by_key(|trade| trade.timestamp);

    let mut aggregator = TradeAggregator::new(interval.clone());
    let mut bars = Vec::new();

    for trade in trades.iter() {
        if let Some(bar) = aggregator.process(*trade) {
            bars.push(bar);
        }
    }

    if let Some(bar) = aggregator.finish() {
        bars.push(bar);
    }

    tracing::info!(
        interval = %interval,
        trades = trades.len(),
        bars = bars.len(),
        "generated OHLCV bars"
    );
    bars
}

/// Builder for OHLCV bars.
#[derive(Debug)]
struct OhlcvBuilder {
    timestamp: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
    trade_count: u32,
}

impl OhlcvBuilder {
    /// Creates a new builder from the first trade.
    const fn new(trade: &CleanTrade) -> Self {
        Self {
            timestamp: trade.timestamp,
            open: trade.price,
            high: trade.price,
            low: trade.price,
            close: trade.price,
            volume: trade.size,
            trade_count: 1,
        }
    }

    /// Updates the builder with a new trade.
    fn update(&mut self, trade: &CleanTrade) {
        self.high = self.high.max(trade.price);
        self.low = self.low.min(trade.price);
        self.close = trade.price;
        self.volume = self.volume.saturating_add(trade.size);
        self.trade_count += 1;
    }

    /// Finishes building and returns the OHLCV bar.
    const fn finish(self) -> Ohlcv {
        Ohlcv::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.trade_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, Timelike};

    fn make_trade(hour: u32, minute: u32, second: u32, price: f64, size: i64) -> CleanTrade {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap();
        CleanTrade::new(timestamp, price, size)
    }

    fn interval(s: &str) -> Interval {
        s.parse().unwrap()
    }

    #[test]
    fn test_end_to_end_hour_bars() {
        let mut trades = vec![
            make_trade(9, 30, 0, 100.0, 10),
            make_trade(9, 31, 0, 102.0, 5),
            make_trade(11, 30, 0, 99.0, 20),
        ];

        let bars = aggregate_trades(&mut trades, &interval("1h"));

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp, trades[0].timestamp);
        assert_relative_eq!(bars[0].open, 100.0);
        assert_relative_eq!(bars[0].high, 102.0);
        assert_relative_eq!(bars[0].low, 100.0);
        assert_relative_eq!(bars[0].close, 102.0);
        assert_eq!(bars[0].volume, 15);

        assert_eq!(bars[1].timestamp, trades[2].timestamp);
        assert_relative_eq!(bars[1].open, 99.0);
        assert_relative_eq!(bars[1].high, 99.0);
        assert_relative_eq!(bars[1].low, 99.0);
        assert_relative_eq!(bars[1].close, 99.0);
        assert_eq!(bars[1].volume, 20);
    }

    #[test]
    fn test_buckets_anchor_on_first_trade() {
        let mut agg = TradeAggregator::new(interval("1h"));

        assert!(agg.process(make_trade(9, 45, 0, 1.0, 1)).is_none());
        // 10:00 would close a clock-aligned bar; here it stays in the 09:45 bucket.
        assert!(agg.process(make_trade(10, 0, 0, 2.0, 1)).is_none());
        assert!(agg.process(make_trade(10, 44, 59, 3.0, 1)).is_none());

        let bar = agg.process(make_trade(10, 45, 0, 4.0, 1)).unwrap();
        assert_eq!(bar.timestamp.minute(), 45);
        assert_eq!(bar.trade_count, 3);

        let last = agg.finish().unwrap();
        assert_eq!(last.timestamp.hour(), 10);
        assert_eq!(last.trade_count, 1);
    }

    #[test]
    fn test_elapsed_equal_to_interval_starts_new_bar() {
        let mut agg = TradeAggregator::new(interval("4s"));
        assert!(agg.process(make_trade(9, 30, 0, 1.0, 1)).is_none());
        assert!(agg.process(make_trade(9, 30, 3, 1.0, 1)).is_none());
        assert!(agg.process(make_trade(9, 30, 4, 1.0, 1)).is_some());
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut trades = vec![
            make_trade(10, 0, 0, 3.0, 1),
            make_trade(9, 30, 0, 1.0, 1),
            make_trade(9, 45, 0, 2.0, 1),
        ];

        let bars = aggregate_trades(&mut trades, &interval("1d"));

        assert_eq!(bars.len(), 1);
        assert_relative_eq!(bars[0].open, 1.0);
        assert_relative_eq!(bars[0].close, 3.0);
    }

    #[test]
    fn test_same_instant_keeps_drain_order() {
        let long = tickbar_types::parse_timestamp("2024-01-01 09:30:00.500000").unwrap();
        let short = tickbar_types::parse_timestamp("2024-01-01 09:30:00.5").unwrap();
        let mut trades = vec![CleanTrade::new(long, 1.0, 1), CleanTrade::new(short, 2.0, 1)];

        let bars = aggregate_trades(&mut trades, &interval("1h"));

        assert_eq!(bars.len(), 1);
        assert_relative_eq!(bars[0].open, 1.0);
        assert_relative_eq!(bars[0].close, 2.0);
    }

    #[test]
    fn test_finish_single_trade() {
        let mut agg = TradeAggregator::new(interval("15m"));
        assert!(agg.process(make_trade(12, 0, 0, 50.0, 7)).is_none());

        let bar = agg.finish().unwrap();
        assert_eq!(bar.trade_count, 1);
        assert_eq!(bar.volume, 7);
        assert_relative_eq!(bar.open, bar.close);
    }

    #[test]
    fn test_empty_input() {
        let bars = aggregate_trades(&mut [], &interval("1m"));
        assert!(bars.is_empty());
        assert!(TradeAggregator::new(interval("1m")).finish().is_none());
    }

    #[test]
    fn test_bar_invariants_and_volume_conservation() {
        let mut trades: Vec<CleanTrade> = (0..390)
            .map(|i| {
                let price = 100.0 + f64::from((i * 37) % 23) - 11.0;
                make_trade(9 + (30 + i) / 60, (30 + i) % 60, (i * 7) % 60, price, i64::from(i % 9))
            })
            .collect();
        let total_size: i64 = trades.iter().map(|t| t.size).sum();

        let bars = aggregate_trades(&mut trades, &interval("15m"));

        assert_eq!(bars.iter().map(|b| b.volume).sum::<i64>(), total_size);
        assert_eq!(
            bars.iter().map(|b| b.trade_count as usize).sum::<usize>(),
            trades.len()
        );
        for bar in &bars {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.open.max(bar.close) >= bar.open.min(bar.close));
            assert!(bar.open.min(bar.close) >= bar.low);
        }
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let mut trades: Vec<CleanTrade> = (0..120)
            .map(|i| make_trade(10, i / 2, (i % 2) * 30, 100.0 + f64::from(i % 5), 1))
            .collect();

        let first = aggregate_trades(&mut trades, &interval("5m"));
        let second = aggregate_trades(&mut trades, &interval("5m"));

        assert_eq!(first, second);
    }
}

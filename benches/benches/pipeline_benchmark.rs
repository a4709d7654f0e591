//! Pipeline stage benchmarks on synthetic trades.
//!
//! Run with: `cargo bench --package tickbar-bench`

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;
use tickbar_bench::{SyntheticConfig, generate_raw_trades, generate_trades, write_trade_dir};
use tickbar_lib::prelude::*;

const SIZES: [usize; 2] = [10_000, 100_000];

fn config(trades: usize) -> SyntheticConfig {
    SyntheticConfig {
        trades,
        ..Default::default()
    }
}

fn clean_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for size in SIZES {
        let rows = generate_raw_trades(&config(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter_batched(
                || rows.clone(),
                |rows| TradeCleaner::default().clean_rows(rows),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for interval in ["1m", "15m", "1h30m"] {
        let interval: Interval = interval.parse().unwrap();
        let trades = generate_trades(&config(100_000));
        group.throughput(Throughput::Elements(trades.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(interval.label()),
            &trades,
            |b, trades| {
                b.iter_batched(
                    || trades.clone(),
                    |mut trades| aggregate_trades(&mut trades, &interval),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn ingest_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("ingest");
    group.sample_size(20);

    for files in [1, 8, 32] {
        let dir = TempDir::new().unwrap();
        write_trade_dir(dir.path(), files, &config(100_000)).unwrap();

        group.throughput(Throughput::Elements(100_000));
        group.bench_with_input(BenchmarkId::new("files", files), dir.path(), |b, path| {
            b.iter(|| runtime.block_on(ingest_dir(path)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, clean_benchmark, aggregate_benchmark, ingest_benchmark);
criterion_main!(benches);

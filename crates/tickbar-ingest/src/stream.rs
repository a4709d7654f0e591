//! Concurrent directory ingestion.

use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::path::{Path, PathBuf};
use tickbar_types::{Result, TickbarError};

use crate::{IngestError, TradeBatch, TradeBuffer, load_file};

/// Lists every entry in `dir`, sorted by path.
///
/// No filtering is applied: a subdirectory or non-delimited file gets a
/// worker like any other entry and simply fails on its own.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub async fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let input_dir_error = |source| TickbarError::InputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(input_dir_error)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(input_dir_error)? {
        files.push(entry.path());
    }
    files.sort();

    Ok(files)
}

/// Spawns one loading task per file and yields each batch as it completes.
///
/// Every file gets its own task; there is no concurrency cap and no timeout.
/// A task that panics is reported as a failed, empty batch for its file.
/// Must be called from within a tokio runtime.
pub fn trade_batches(files: Vec<PathBuf>) -> impl Stream<Item = TradeBatch> {
    files
        .into_iter()
        .map(|path| {
            let handle = tokio::spawn(load_file(path.clone()));
            async move {
                match handle.await {
                    Ok(batch) => batch,
                    Err(e) => {
                        tracing::warn!(file = %path.display(), error = %e, "ingest worker failed");
                        TradeBatch::failed(path, Vec::new(), IngestError::Worker(e.to_string()))
                    }
                }
            }
        })
        .collect::<FuturesUnordered<_>>()
}

/// Loads the given files concurrently and waits for all of them.
///
/// `on_batch` is called once per file as its worker completes, in completion
/// order. Returns only after every worker has finished, successfully or not,
/// so the returned buffer is complete.
pub async fn ingest_files<F>(files: Vec<PathBuf>, mut on_batch: F) -> TradeBuffer
where
    F: FnMut(&TradeBatch),
{
    if files.is_empty() {
        tracing::info!("no input files found");
        return TradeBuffer::new();
    }

    let mut batches = Vec::with_capacity(files.len());
    let mut stream = std::pin::pin!(trade_batches(files));
    while let Some(batch) = stream.next().await {
        on_batch(&batch);
        batches.push(batch);
    }

    let buffer = TradeBuffer::from_batches(batches);
    let summary = buffer.summary();
    tracing::info!(
        files = summary.files,
        failed_files = summary.failed_files,
        rows = summary.rows,
        "total rows loaded"
    );

    buffer
}

/// Loads every file in `dir` concurrently and waits for all of them.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed. Per-file failures are
/// logged and counted in the buffer's summary instead.
pub async fn ingest_dir(dir: &Path) -> Result<TradeBuffer> {
    let files = discover_files(dir).await?;
    Ok(ingest_files(files, |_| {}).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Timestamp,Price,Size\n";

    fn write(dir: &Path, name: &str, rows: &[&str]) {
        let mut contents = HEADER.to_string();
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn test_ingest_dir_merges_all_files() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "b.csv",
            &["2024-01-01 10:00:00.000000,101,1", "2024-01-01 10:01:00.000000,102,2"],
        );
        write(dir.path(), "a.csv", &["2024-01-01 09:30:00.000000,100,5"]);

        let mut buffer = ingest_dir(dir.path()).await.unwrap();

        assert_eq!(buffer.summary().files, 2);
        assert_eq!(buffer.summary().failed_files, 0);
        assert_eq!(buffer.len(), 3);
        let first = buffer.drain().next().unwrap();
        assert_eq!(first.price, "100");
    }

    #[tokio::test]
    async fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = ingest_dir(dir.path()).await.unwrap();

        assert!(buffer.is_empty());
        assert_eq!(buffer.summary().files, 0);
    }

    #[tokio::test]
    async fn test_failed_entry_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.csv", &["2024-01-01 09:30:00.000000,100,5"]);
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let buffer = ingest_dir(dir.path()).await.unwrap();

        assert_eq!(buffer.summary().files, 2);
        assert_eq!(buffer.summary().failed_files, 1);
        assert_eq!(buffer.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ingest_dir(&dir.path().join("absent")).await;

        assert!(matches!(result, Err(TickbarError::InputDir { .. })));
    }

    #[tokio::test]
    async fn test_ingest_files_reports_each_batch() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", &["2024-01-01 09:30:00.000000,100,5"]);
        write(dir.path(), "b.csv", &[]);
        let files = discover_files(dir.path()).await.unwrap();

        let mut seen = Vec::new();
        let buffer = ingest_files(files, |batch| seen.push(batch.len())).await;

        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(buffer.len(), 1);
    }

    #[tokio::test]
    async fn test_trade_batches_one_per_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["x.csv", "y.csv", "z.csv"] {
            write(dir.path(), name, &["2024-01-01 09:30:00.000000,100,5"]);
        }
        let files = discover_files(dir.path()).await.unwrap();

        let batches: Vec<_> = trade_batches(files).collect().await;

        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.len() == 1 && !b.had_error()));
    }
}

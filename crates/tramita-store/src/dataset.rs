//! Append-only JSONL dataset writer
//!
//! One output file per source run, one compact JSON object per line. The
//! file is owned by a single writer task; concurrent producers hand records
//! over an mpsc channel instead of sharing the file handle.

use crate::StoreError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tramita_domain::traits::RecordSink;
use tramita_domain::CanonicalRecord;

const CHANNEL_CAPACITY: usize = 64;

/// Handle to the per-run dataset writer task
///
/// Cloneable; every clone feeds the same sequential writer. Call
/// [`DatasetWriter::close`] once all producers are done to flush the file
/// and collect the line count.
pub struct DatasetWriter {
    tx: mpsc::Sender<CanonicalRecord>,
    task: JoinHandle<Result<usize, StoreError>>,
}

impl DatasetWriter {
    /// Conventional dataset file path for one source run
    pub fn dataset_path(output_dir: &Path, slug: &str) -> PathBuf {
        output_dir.join(format!("{}_proposicoes.jl", slug))
    }

    /// Create the output file and start the writer task
    ///
    /// An existing file at `path` is truncated; a run owns its output.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let file = fs::File::create(&path).await?;

        let (tx, mut rx) = mpsc::channel::<CanonicalRecord>(CHANNEL_CAPACITY);
        let task = tokio::spawn(async move {
            let mut out = BufWriter::new(file);
            let mut written = 0usize;
            while let Some(record) = rx.recv().await {
                let mut line = serde_json::to_vec(&record)?;
                line.push(b'\n');
                out.write_all(&line).await?;
                written += 1;
                debug!(natural_key = %record.natural_key(), "dataset line written");
            }
            out.flush().await?;
            info!(lines = written, path = %path.display(), "dataset closed");
            Ok(written)
        });

        Ok(Self { tx, task })
    }

    /// Get a second producer handle onto the same writer
    pub fn sender(&self) -> DatasetSender {
        DatasetSender {
            tx: self.tx.clone(),
        }
    }

    /// Shut the writer down and return the number of lines written
    pub async fn close(self) -> Result<usize, StoreError> {
        drop(self.tx);
        self.task
            .await
            .map_err(|e| StoreError::WriterTask(e.to_string()))?
    }
}

impl RecordSink for DatasetWriter {
    type Error = StoreError;

    async fn write(&self, record: CanonicalRecord) -> Result<(), Self::Error> {
        self.tx
            .send(record)
            .await
            .map_err(|_| StoreError::SinkClosed)
    }
}

/// Cloneable producer handle for concurrent record pipelines
#[derive(Clone)]
pub struct DatasetSender {
    tx: mpsc::Sender<CanonicalRecord>,
}

impl RecordSink for DatasetSender {
    type Error = StoreError;

    async fn write(&self, record: CanonicalRecord) -> Result<(), Self::Error> {
        self.tx
            .send(record)
            .await
            .map_err(|_| StoreError::SinkClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tramita_domain::{Locality, Sphere};

    fn record(number: &str) -> CanonicalRecord {
        CanonicalRecord {
            locality: Locality {
                sphere: Some(Sphere::Municipal),
                municipality: Some("Linhares".to_string()),
                state: "ES".to_string(),
            },
            legislative_body: "Câmara Municipal de Linhares".to_string(),
            doc_type: "Projeto de Lei".to_string(),
            number: number.to_string(),
            document_date: Default::default(),
            authors: vec![],
            summary: None,
            subjects: vec![],
            status_events: vec![],
            origin_url: format!("https://example.gov.br/{}", number),
            original_path: None,
            text_path: format!("es/linhares/src/pl-{}-2025.md", number),
            scraped_at: None,
        }
    }

    #[tokio::test]
    async fn test_writes_one_compact_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = DatasetWriter::dataset_path(dir.path(), "proposicoeslinhares");

        let writer = DatasetWriter::create(&path).await.unwrap();
        writer.write(record("1")).await.unwrap();
        writer.write(record("2")).await.unwrap();
        assert_eq!(writer.close().await.unwrap(), 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(!line.contains("\n"));
            let parsed: CanonicalRecord = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.doc_type, "Projeto de Lei");
        }
    }

    #[tokio::test]
    async fn test_concurrent_producers_serialize_through_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jl");

        let writer = DatasetWriter::create(&path).await.unwrap();
        let mut handles = Vec::new();
        for i in 0..10 {
            let sender = writer.sender();
            handles.push(tokio::spawn(async move {
                sender.write(record(&i.to_string())).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(writer.close().await.unwrap(), 10);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 10);
    }

    #[tokio::test]
    async fn test_recreate_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jl");

        let writer = DatasetWriter::create(&path).await.unwrap();
        writer.write(record("1")).await.unwrap();
        writer.close().await.unwrap();

        let writer = DatasetWriter::create(&path).await.unwrap();
        writer.write(record("2")).await.unwrap();
        writer.close().await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"numero_documento\":\"2\""));
    }
}

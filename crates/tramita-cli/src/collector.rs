//! Fixture collector - replays raw-record dumps through the pipeline
//!
//! The operational re-run tool: per-portal crawlers dump raw records as
//! JSONL, and this collector feeds such a dump back through the `Collector`
//! boundary exactly like a live source would. It is also the test double
//! for the pipeline's collector-facing code.

use crate::error::{CliError, Result};
use std::collections::VecDeque;
use std::path::Path;
use tokio::fs;
use tracing::debug;
use tramita_domain::traits::Collector;
use tramita_domain::{CrawlCursor, RawRecord};

const PAGE_SIZE: usize = 50;

/// Collector over a JSONL file of raw records
pub struct FixtureCollector {
    slug: String,
    records: VecDeque<RawRecord>,
}

impl FixtureCollector {
    /// Load a raw-record dump
    ///
    /// Each line must be one raw record in the raw wire schema. The source
    /// slug comes from `slug_override`, else from the first record, else
    /// "fixture".
    pub async fn open(path: &Path, slug_override: Option<String>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| CliError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let mut records = VecDeque::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: RawRecord = serde_json::from_str(line).map_err(|e| {
                CliError::InvalidInput(format!("{}:{}: {}", path.display(), idx + 1, e))
            })?;
            records.push_back(record);
        }

        let slug = slug_override
            .or_else(|| records.front().and_then(|r| r.source_slug.clone()))
            .unwrap_or_else(|| "fixture".to_string());

        debug!(slug = %slug, records = records.len(), "fixture loaded");
        Ok(Self { slug, records })
    }

    /// Number of records left to serve
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl Collector for FixtureCollector {
    type Error = CliError;

    fn slug(&self) -> &str {
        &self.slug
    }

    async fn collect_page(
        &mut self,
        cursor: &mut CrawlCursor,
    ) -> std::result::Result<Option<Vec<RawRecord>>, Self::Error> {
        if cursor.cutoff_reached() || self.records.is_empty() {
            return Ok(None);
        }
        let take = PAGE_SIZE.min(self.records.len());
        Ok(Some(self.records.drain(..take).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fixture_with_lines(lines: &[&str]) -> (tempfile::TempDir, FixtureCollector) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.jl");
        std::fs::write(&path, lines.join("\n")).unwrap();
        let collector = FixtureCollector::open(&path, None).await.unwrap();
        (dir, collector)
    }

    #[tokio::test]
    async fn test_open_parses_lines_and_slug() {
        let (_dir, collector) = fixture_with_lines(&[
            r#"{"slug_bruto": "proposicoespe", "tipo_bruto": "Projeto de Lei"}"#,
            r#"{"slug_bruto": "proposicoespe", "tipo_bruto": "Requerimento"}"#,
        ])
        .await;
        assert_eq!(collector.slug(), "proposicoespe");
        assert_eq!(collector.remaining(), 2);
    }

    #[tokio::test]
    async fn test_collect_page_honors_cutoff() {
        let (_dir, mut collector) =
            fixture_with_lines(&[r#"{"tipo_bruto": "Projeto de Lei"}"#]).await;
        let mut cursor = CrawlCursor::new(None, None, None);
        cursor.mark_cutoff();
        assert!(collector
            .collect_page(&mut cursor)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_collect_drains_then_ends() {
        let (_dir, mut collector) = fixture_with_lines(&[
            r#"{"tipo_bruto": "Projeto de Lei"}"#,
            r#"{"tipo_bruto": "Requerimento"}"#,
        ])
        .await;
        let mut cursor = CrawlCursor::new(None, None, None);
        let page = collector.collect_page(&mut cursor).await.unwrap().unwrap();
        assert_eq!(page.len(), 2);
        assert!(collector
            .collect_page(&mut cursor)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_malformed_line_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.jl");
        std::fs::write(&path, "{not json}").unwrap();
        let result = FixtureCollector::open(&path, None).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}

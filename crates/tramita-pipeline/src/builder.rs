//! Canonical record assembly
//!
//! Pure composition of the normalizer and path resolver outputs; performs
//! no I/O. Callers must validate raw records first — an incomplete record
//! reaching the builder is a pipeline bug, not a recoverable condition.

use crate::config::PipelineConfig;
use crate::normalize::{document_key, parse_date, split_author, tidy_status_description};
use crate::paths;
use tramita_domain::{CanonicalRecord, Locality, RawRecord, StatusEvent};

/// Assembles canonical records from validated raw records
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: PipelineConfig,
}

impl Builder {
    /// Create a builder with the given pipeline configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Assemble the canonical record for one validated raw record
    ///
    /// Artifact paths are derived deterministically from the record's
    /// identity; a collector-supplied original-document path takes
    /// precedence when present. Status events are normalized 1:1 and capped
    /// to the configured most-recent window.
    pub fn build(&self, record: RawRecord) -> CanonicalRecord {
        let state = record.state.clone().unwrap_or_default();
        let municipality = record.municipality.clone();
        let source_slug = record.source_slug.clone().unwrap_or_default();

        let doc_key = document_key(
            record.doc_type.as_deref(),
            record.number.as_deref(),
            record.year.as_deref(),
        );
        let has_document = record.has_document();
        let resolved = paths::resolve(
            &state,
            municipality.as_deref().unwrap_or(""),
            &source_slug,
            &doc_key,
            has_document,
        );

        // Multi-stage collectors may have resolved the original path while
        // crawling detail pages; keep theirs when present.
        let original_path = record.original_path.clone().or(resolved.original);

        let mut status_events: Vec<StatusEvent> = record
            .status_events
            .iter()
            .map(|event| StatusEvent {
                description: tidy_status_description(&event.description),
                date: parse_date(event.date.as_deref()),
            })
            .collect();
        let cap = self.config.status_history_limit;
        if status_events.len() > cap {
            status_events.drain(..status_events.len() - cap);
        }

        CanonicalRecord {
            locality: Locality {
                sphere: record.sphere,
                municipality,
                state,
            },
            legislative_body: record.legislative_body.clone().unwrap_or_default(),
            doc_type: record.doc_type.clone().unwrap_or_default(),
            number: record.number.as_deref().unwrap_or_default().trim().to_string(),
            document_date: parse_date(record.document_date.as_deref()),
            authors: record.authors.iter().map(|a| split_author(a)).collect(),
            summary: record.summary.clone(),
            subjects: record.subjects.clone(),
            status_events,
            origin_url: record
                .document_url
                .clone()
                .or_else(|| record.origin_url.clone())
                .unwrap_or_default(),
            original_path,
            text_path: resolved.text,
            scraped_at: record.scraped_at.clone(),
        }
    }
}

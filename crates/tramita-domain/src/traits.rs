//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline core and
//! infrastructure. Implementations live in other crates: collectors are
//! per-portal glue, LLM providers in `tramita-llm`, sinks in
//! `tramita-store`. New sources are added by implementing [`Collector`],
//! never by modifying the core.

use crate::canonical::CanonicalRecord;
use crate::cursor::CrawlCursor;
use crate::record::RawRecord;

/// One legislature portal feeding raw records into the pipeline
///
/// A collector owns its portal's pagination and politeness; the cursor it
/// receives is the run's explicit cutoff state. Returning `Ok(None)` ends
/// the crawl for this source.
pub trait Collector {
    /// Error type for collection operations
    type Error;

    /// Stable identifier of this source portal
    fn slug(&self) -> &str;

    /// Fetch the next listing page of raw records
    ///
    /// Implementations must consult `cursor.cutoff_reached()` before
    /// scheduling further fetches and may call `cursor.mark_cutoff()` when a
    /// date-ordered listing walks past the configured range.
    fn collect_page(
        &mut self,
        cursor: &mut CrawlCursor,
    ) -> impl std::future::Future<Output = Result<Option<Vec<RawRecord>>, Self::Error>> + Send;
}

/// Text-generation capability backing document extraction and subject
/// classification
///
/// The pipeline consumes this best-effort: any failure degrades the
/// affected record's text/subjects to empty and never blocks archival.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a text prompt
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, Self::Error>> + Send;

    /// Generate a completion for a prompt plus an attached document
    fn generate_with_document(
        &self,
        prompt: &str,
        document: &[u8],
        mime_type: &str,
    ) -> impl std::future::Future<Output = Result<String, Self::Error>> + Send;
}

/// Terminal sink for canonical records
///
/// Implemented by the append-only dataset writer. Producers hand completed
/// records to the sink; the sink serializes writes internally.
pub trait RecordSink {
    /// Error type for sink operations
    type Error;

    /// Append one canonical record
    fn write(
        &self,
        record: CanonicalRecord,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}

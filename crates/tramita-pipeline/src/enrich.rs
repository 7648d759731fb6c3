//! Best-effort LLM enrichment
//!
//! Wraps the injected [`LlmProvider`] capability for the two enrichment
//! operations: extracting markdown text from document bytes and classifying
//! a text's subjects. Enrichment must never block archival: every failure
//! mode (timeout, quota, malformed output) degrades to "no text"/"no
//! subjects" with a warning.

use crate::config::PipelineConfig;
use crate::prompt;
use crate::subjects::parse_subject_response;
use tokio::time::timeout;
use tracing::{debug, warn};
use tramita_domain::traits::LlmProvider;
use tramita_domain::CanonicalRecord;

/// MIME type sent with original-document bytes
const DOCUMENT_MIME: &str = "application/pdf";

/// Best-effort text/subject enrichment over an injected LLM capability
pub struct Enricher<L: LlmProvider> {
    provider: L,
    config: PipelineConfig,
}

impl<L> Enricher<L>
where
    L: LlmProvider + Sync,
    L::Error: std::fmt::Display,
{
    /// Create an enricher around a provider
    pub fn new(provider: L, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    /// Extract markdown text from original-document bytes
    ///
    /// Returns None on any failure; the caller records the record's text as
    /// pending and moves on.
    pub async fn extract_text(&self, document: &[u8]) -> Option<String> {
        let call = self
            .provider
            .generate_with_document(prompt::TEXT_EXTRACTION_PROMPT, document, DOCUMENT_MIME);
        match timeout(self.config.enrichment_timeout(), call).await {
            Err(_) => {
                warn!("text extraction timed out");
                None
            }
            Ok(Err(e)) => {
                warn!(error = %e, "text extraction failed");
                None
            }
            Ok(Ok(text)) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    warn!("text extraction returned empty output");
                    None
                } else {
                    debug!(chars = text.len(), "text extracted");
                    Some(text)
                }
            }
        }
    }

    /// Classify a document text into subject tags
    ///
    /// Returns an empty list on any failure, including responses below the
    /// configured subject floor.
    pub async fn classify_subjects(&self, text: &str) -> Vec<String> {
        let prompt = prompt::classification_prompt(text, &self.config);
        match timeout(self.config.enrichment_timeout(), self.provider.generate(&prompt)).await {
            Err(_) => {
                warn!("subject classification timed out");
                Vec::new()
            }
            Ok(Err(e)) => {
                warn!(error = %e, "subject classification failed");
                Vec::new()
            }
            Ok(Ok(response)) => match parse_subject_response(&response, &self.config) {
                Ok(subjects) => subjects,
                Err(e) => {
                    warn!(error = %e, "unusable classifier response");
                    Vec::new()
                }
            },
        }
    }

    /// Fill a record's subjects from its text when the portal gave none
    ///
    /// The single permitted mutation of a canonical record. Returns whether
    /// subjects were added.
    pub async fn enrich_subjects(&self, record: &mut CanonicalRecord, text: &str) -> bool {
        if !record.subjects.is_empty() {
            return false;
        }
        let subjects = self.classify_subjects(text).await;
        if subjects.is_empty() {
            return false;
        }
        record.subjects = subjects;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tramita_domain::{Locality, Sphere};
    use tramita_llm::MockProvider;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    fn record() -> CanonicalRecord {
        CanonicalRecord {
            locality: Locality {
                sphere: Some(Sphere::Municipal),
                municipality: Some("Fortaleza".to_string()),
                state: "CE".to_string(),
            },
            legislative_body: "Câmara Municipal de Fortaleza".to_string(),
            doc_type: "Projeto de Lei".to_string(),
            number: "10".to_string(),
            document_date: Default::default(),
            authors: vec![],
            summary: None,
            subjects: vec![],
            status_events: vec![],
            origin_url: "https://example.gov.br/10".to_string(),
            original_path: None,
            text_path: "ce/fortaleza/src/projeto-de-lei-10-2025.md".to_string(),
            scraped_at: None,
        }
    }

    #[tokio::test]
    async fn test_extract_text_happy_path() {
        let provider = MockProvider::new("# Projeto de Lei\n\nArt. 1º ...");
        let enricher = Enricher::new(provider, config());
        let text = enricher.extract_text(b"%PDF-1.4").await;
        assert_eq!(text.as_deref(), Some("# Projeto de Lei\n\nArt. 1º ..."));
    }

    #[tokio::test]
    async fn test_extract_text_degrades_on_provider_error() {
        let mut provider = MockProvider::default();
        provider.fail_next();
        let enricher = Enricher::new(provider, config());
        assert_eq!(enricher.extract_text(b"%PDF-1.4").await, None);
    }

    #[tokio::test]
    async fn test_classify_subjects_parses_response() {
        let provider =
            MockProvider::new(r#"["saúde pública", "educação básica", "transporte coletivo"]"#);
        let enricher = Enricher::new(provider, config());
        let subjects = enricher.classify_subjects("Dispõe sobre...").await;
        assert_eq!(
            subjects,
            vec!["Saúde pública", "Educação básica", "Transporte coletivo"]
        );
    }

    #[tokio::test]
    async fn test_classify_subjects_degrades_on_garbage() {
        let provider = MockProvider::new("no JSON here");
        let enricher = Enricher::new(provider, config());
        assert!(enricher.classify_subjects("text").await.is_empty());
    }

    #[tokio::test]
    async fn test_enrich_subjects_mutates_once() {
        let provider = MockProvider::new(r#"["saúde", "educação", "cultura"]"#);
        let enricher = Enricher::new(provider, config());

        let mut record = record();
        assert!(enricher.enrich_subjects(&mut record, "texto").await);
        assert_eq!(record.subjects.len(), 3);

        // Already-filled subjects are left alone
        let before = record.subjects.clone();
        assert!(!enricher.enrich_subjects(&mut record, "texto").await);
        assert_eq!(record.subjects, before);
    }
}

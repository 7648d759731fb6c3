//! Enrich command - deferred text extraction over a written dataset.
//!
//! Walks a harvest run's dataset and fills the gaps: records that have an
//! archived original document but no derived-text artifact get their text
//! extracted and stored at the same deterministic path the harvest
//! resolved. Records whose text already exists are skipped, so the pass is
//! safe to re-run. The dataset file itself is append-only and stays
//! untouched.

use crate::cli::EnrichArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use tokio::fs;
use tracing::{debug, info, warn};
use tramita_domain::CanonicalRecord;
use tramita_llm::GeminiProvider;
use tramita_pipeline::{Enricher, RunSummary};
use tramita_store::{DocumentStore, TextStore};

/// Execute a deferred-enrichment pass over one dataset file.
pub async fn execute_enrich(args: EnrichArgs, config: &Config) -> Result<RunSummary> {
    let api_key = args
        .gemini_api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| CliError::Config("GEMINI_API_KEY is required for enrich".to_string()))?;
    if args.limit == Some(0) {
        return Err(CliError::Config("limit must be a positive integer".to_string()));
    }

    let enricher = Enricher::new(
        GeminiProvider::new(api_key, config.gemini_model.clone()),
        config.pipeline.clone(),
    );
    let documents = DocumentStore::new(&config.storage_root);
    let texts = TextStore::new(&config.storage_root);

    let contents = fs::read_to_string(&args.dataset).await.map_err(|e| {
        CliError::Config(format!("cannot read {}: {}", args.dataset.display(), e))
    })?;

    let mut summary = RunSummary::default();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(limit) = args.limit {
            if summary.texts_written >= limit {
                break;
            }
        }

        let record: CanonicalRecord = serde_json::from_str(line).map_err(|e| {
            CliError::InvalidInput(format!("{}:{}: {}", args.dataset.display(), idx + 1, e))
        })?;
        summary.collected += 1;
        let key = record.natural_key();

        let Some(pdf_path) = record.original_path.as_deref() else {
            warn!(natural_key = %key, "record has no original-document path");
            continue;
        };
        if texts.exists(&record.text_path).await {
            debug!(natural_key = %key, "text artifact already exists");
            continue;
        }

        let bytes = match documents.read(pdf_path).await {
            Ok(bytes) => bytes,
            Err(_) => {
                warn!(natural_key = %key, path = pdf_path, "stored document not found");
                continue;
            }
        };

        info!(natural_key = %key, path = pdf_path, "extracting text");
        match enricher.extract_text(&bytes).await {
            Some(text) => {
                texts.write(&record.text_path, &text).await?;
                summary.texts_written += 1;
            }
            None => summary.enrichment_failures += 1,
        }
    }

    info!(%summary, "enrich finished");
    Ok(summary)
}

//! Harvest command - raw records in, canonical dataset and artifacts out.

use crate::cli::HarvestArgs;
use crate::collector::FixtureCollector;
use crate::config::Config;
use crate::error::{CliError, Result};
use chrono::NaiveDate;
use tracing::{info, warn};
use tramita_domain::traits::{Collector, RecordSink};
use tramita_domain::CrawlCursor;
use tramita_llm::GeminiProvider;
use tramita_pipeline::{Builder, Enricher, RunSummary};
use tramita_store::{DatasetWriter, DocumentStore, TextStore};
use tramita_validator::validate;

/// Parse an ISO date argument, failing fast on bad input
fn parse_date_arg(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .map_err(|_| CliError::Config(format!("{} must be YYYY-MM-DD, got '{}'", name, v)))
        })
        .transpose()
}

/// Validate the limit argument, failing fast on zero
fn parse_limit_arg(limit: Option<usize>) -> Result<Option<usize>> {
    match limit {
        Some(0) => Err(CliError::Config("limit must be a positive integer".to_string())),
        other => Ok(other),
    }
}

/// Execute a harvest run over a raw-record dump.
///
/// Configuration problems (bad dates, zero limit, missing API key with
/// --enrich) are fatal and reported before anything is read or fetched.
/// Per-record problems never abort the run; they are counted in the
/// returned summary.
pub async fn execute_harvest(args: HarvestArgs, config: &Config) -> Result<RunSummary> {
    let start_date = parse_date_arg(args.start_date.as_deref(), "start_date")?;
    let end_date = parse_date_arg(args.end_date.as_deref(), "end_date")?;
    let limit = parse_limit_arg(args.limit)?;

    let enricher = if args.enrich {
        let api_key = args.gemini_api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(
            || CliError::Config("GEMINI_API_KEY is required with --enrich".to_string()),
        )?;
        Some(Enricher::new(
            GeminiProvider::new(api_key, config.gemini_model.clone()),
            config.pipeline.clone(),
        ))
    } else {
        None
    };

    let mut collector = FixtureCollector::open(&args.input, args.slug.clone()).await?;
    let mut cursor = CrawlCursor::new(limit, start_date, end_date);
    let builder = Builder::new(config.pipeline.clone());
    let documents = DocumentStore::new(&config.storage_root);
    let texts = TextStore::new(&config.storage_root);

    let dataset_path = DatasetWriter::dataset_path(&config.output_dir, collector.slug());
    let writer = DatasetWriter::create(&dataset_path).await?;
    info!(dataset = %dataset_path.display(), slug = collector.slug(), "harvest started");

    let mut summary = RunSummary::default();

    'crawl: while let Some(page) = collector.collect_page(&mut cursor).await? {
        for raw in page {
            summary.collected += 1;

            let raw = match validate(raw) {
                Ok(raw) => raw,
                Err(_) => {
                    summary.dropped += 1;
                    continue;
                }
            };

            let download_url = raw
                .file_urls
                .first()
                .cloned()
                .or_else(|| raw.document_url.clone());
            let mut record = builder.build(raw);

            if !cursor.in_range(record.document_date.as_date()) {
                summary.out_of_range += 1;
                continue;
            }
            cursor.record_seen();

            let mut document_bytes = None;
            if args.fetch_documents {
                if let (Some(path), Some(url)) = (record.original_path.as_deref(), &download_url) {
                    match documents.fetch_and_store(url, path).await {
                        Ok(()) => {
                            summary.documents_stored += 1;
                            if enricher.is_some() {
                                document_bytes = documents.read(path).await.ok();
                            }
                        }
                        Err(e) => {
                            // Path stays in the record so a re-run can fill it
                            warn!(
                                natural_key = %record.natural_key(),
                                error = %e,
                                "document fetch failed, artifact path retained"
                            );
                        }
                    }
                }
            }

            if let (Some(enricher), Some(bytes)) = (&enricher, document_bytes) {
                match enricher.extract_text(&bytes).await {
                    Some(text) => {
                        if texts.write(&record.text_path, &text).await.is_ok() {
                            summary.texts_written += 1;
                        }
                        enricher.enrich_subjects(&mut record, &text).await;
                    }
                    None => summary.enrichment_failures += 1,
                }
            }

            writer.write(record).await?;
            summary.written += 1;

            if cursor.cutoff_reached() {
                break 'crawl;
            }
        }
    }

    writer.close().await?;
    info!(%summary, "harvest finished");
    Ok(summary)
}

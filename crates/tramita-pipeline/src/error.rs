//! Error types for the pipeline

use thiserror::Error;

/// Errors local to pipeline stages
///
/// None of these abort a run: enrichment errors degrade the affected
/// record's text/subjects to empty, configuration errors are surfaced
/// before any record flows.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// LLM capability error (network, quota, provider-side failure)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Enrichment call exceeded the configured timeout
    #[error("enrichment timeout")]
    Timeout,

    /// Classifier response could not be parsed into subjects
    #[error("invalid classifier response: {0}")]
    InvalidFormat(String),

    /// Invalid pipeline configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::InvalidFormat(e.to_string())
    }
}

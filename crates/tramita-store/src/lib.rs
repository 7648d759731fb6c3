//! Tramita Storage Layer
//!
//! Side-effecting sinks keyed off the deterministic paths resolved by the
//! pipeline:
//!
//! - [`DocumentStore`]: original documents under `<storage_root>/pdf/`
//! - [`TextStore`]: derived text under `<storage_root>/md/`
//! - [`DatasetWriter`]: append-only JSONL dataset, one writer task per run
//!
//! Writers for the same resolved path overwrite; re-runs and retries are
//! idempotent by construction. Writers for different records never collide
//! because their paths never collide.

#![warn(missing_docs)]

mod dataset;
mod documents;
mod texts;

pub use dataset::{DatasetSender, DatasetWriter};
pub use documents::DocumentStore;
pub use texts::TextStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network failure fetching an original document
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Record serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The dataset writer task has already shut down
    #[error("Dataset sink closed")]
    SinkClosed,

    /// The dataset writer task panicked or was cancelled
    #[error("Writer task failed: {0}")]
    WriterTask(String),
}

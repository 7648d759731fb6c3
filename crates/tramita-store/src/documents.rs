//! Original-document fetch-and-store

use crate::StoreError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Stores original documents under `<storage_root>/pdf/`
///
/// Target paths come from the pipeline's deterministic resolver, so a
/// re-run or retry for the same record overwrites the same file. A fetch
/// failure means "document absent for now"; the record keeps its resolved
/// path and a later run against the same path fills the gap.
pub struct DocumentStore {
    root: PathBuf,
    client: reqwest::Client,
}

impl DocumentStore {
    /// Subtree prefix for original documents
    pub const SUBTREE: &'static str = "pdf";

    /// Create a store rooted at `<storage_root>/pdf/`
    pub fn new(storage_root: impl AsRef<Path>) -> Self {
        Self {
            root: storage_root.as_ref().join(Self::SUBTREE),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute path of a resolved relative artifact path
    pub fn absolute_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether the artifact already exists on disk
    pub async fn exists(&self, relative: &str) -> bool {
        fs::try_exists(self.absolute_path(relative))
            .await
            .unwrap_or(false)
    }

    /// Write document bytes at the resolved path, overwriting any previous copy
    pub async fn store_bytes(&self, relative: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.absolute_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "document stored");
        Ok(())
    }

    /// Read a stored document back, e.g. for the deferred extraction pass
    pub async fn read(&self, relative: &str) -> Result<Vec<u8>, StoreError> {
        Ok(fs::read(self.absolute_path(relative)).await?)
    }

    /// Fetch a document URL and store it at the resolved path
    ///
    /// Any network or HTTP failure is reported as [`StoreError::Fetch`];
    /// callers treat it as "document absent", never as fatal.
    pub async fn fetch_and_store(&self, url: &str, relative: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url, error = %e, "document fetch failed");
                StoreError::Fetch(e.to_string())
            })?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?;
        self.store_bytes(relative, &bytes).await
    }
}

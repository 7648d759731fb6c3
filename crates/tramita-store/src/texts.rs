//! Derived-text store

use crate::StoreError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores derived markdown text under `<storage_root>/md/`
///
/// Shares the document store's idempotence contract: the deferred
/// extraction pass checks [`TextStore::exists`] before spending an LLM call
/// and overwrites cleanly when re-run.
pub struct TextStore {
    root: PathBuf,
}

impl TextStore {
    /// Subtree prefix for derived text
    pub const SUBTREE: &'static str = "md";

    /// Create a store rooted at `<storage_root>/md/`
    pub fn new(storage_root: impl AsRef<Path>) -> Self {
        Self {
            root: storage_root.as_ref().join(Self::SUBTREE),
        }
    }

    /// Absolute path of a resolved relative artifact path
    pub fn absolute_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether the text artifact already exists on disk
    pub async fn exists(&self, relative: &str) -> bool {
        fs::try_exists(self.absolute_path(relative))
            .await
            .unwrap_or(false)
    }

    /// Write the text artifact, overwriting any previous copy
    pub async fn write(&self, relative: &str, text: &str) -> Result<(), StoreError> {
        let path = self.absolute_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, text).await?;
        debug!(path = %path.display(), chars = text.len(), "text stored");
        Ok(())
    }

    /// Read a stored text artifact back
    pub async fn read(&self, relative: &str) -> Result<String, StoreError> {
        Ok(fs::read_to_string(self.absolute_path(relative)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path());
        let relative = "es/linhares/proposicoeslinhares/pl-3-2025.md";

        store.write(relative, "# Projeto de Lei 3/2025").await.unwrap();
        assert!(store.exists(relative).await);
        assert_eq!(store.read(relative).await.unwrap(), "# Projeto de Lei 3/2025");
        assert!(store.absolute_path(relative).starts_with(dir.path().join("md")));
    }

    #[tokio::test]
    async fn test_overwrite_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextStore::new(dir.path());

        store.write("a/b.md", "v1").await.unwrap();
        store.write("a/b.md", "v2").await.unwrap();
        assert_eq!(store.read("a/b.md").await.unwrap(), "v2");
    }
}

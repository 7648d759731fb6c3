//! Deterministic artifact-path resolution
//!
//! Storage paths are pure functions of the record's identity. Equal inputs
//! yield byte-identical paths in any process execution, which makes re-runs
//! and the deferred text-extraction pass idempotent.

use crate::normalize::slugify;

/// Resolved relative storage paths for one record's artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Path of the archived original document; None when no document exists
    pub original: Option<String>,

    /// Path of the derived-text file; always present since some portals
    /// expose inline text without any file
    pub text: String,
}

/// Resolve the artifact paths for one document identity
///
/// `base = slugify(state)/slugify(municipality)/source_slug/doc_key`, with
/// empty segments (e.g. no municipality for a state assembly) omitted.
/// The original-document path exists iff the record carries a document.
pub fn resolve(
    state: &str,
    municipality: &str,
    source_slug: &str,
    doc_key: &str,
    has_document: bool,
) -> ArtifactPaths {
    let segments = [
        slugify(state),
        slugify(municipality),
        source_slug.to_string(),
        doc_key.to_string(),
    ];
    let base = segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("/");

    ArtifactPaths {
        original: has_document.then(|| format!("{}.pdf", base)),
        text: format!("{}.md", base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_document() {
        let paths = resolve(
            "RJ",
            "Rio de Janeiro",
            "proposicoescidrj",
            "projeto-de-lei-123-2024",
            true,
        );
        assert_eq!(
            paths.original.as_deref(),
            Some("rj/rio-de-janeiro/proposicoescidrj/projeto-de-lei-123-2024.pdf")
        );
        assert_eq!(
            paths.text,
            "rj/rio-de-janeiro/proposicoescidrj/projeto-de-lei-123-2024.md"
        );
    }

    #[test]
    fn test_resolve_without_document() {
        let paths = resolve(
            "RJ",
            "Rio de Janeiro",
            "proposicoescidrj",
            "projeto-de-lei-123-2024",
            false,
        );
        assert_eq!(paths.original, None);
        assert_eq!(
            paths.text,
            "rj/rio-de-janeiro/proposicoescidrj/projeto-de-lei-123-2024.md"
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let a = resolve("SP", "São Paulo", "proposicoescidsp", "pl-1-2025", true);
        let b = resolve("SP", "São Paulo", "proposicoescidsp", "pl-1-2025", true);
        assert_eq!(a, b);
        assert_eq!(a.text, "sp/sao-paulo/proposicoescidsp/pl-1-2025.md");
    }

    #[test]
    fn test_resolve_omits_empty_municipality() {
        let paths = resolve("MG", "", "proposicoesmg", "pl-7-2024", true);
        assert_eq!(
            paths.original.as_deref(),
            Some("mg/proposicoesmg/pl-7-2024.pdf")
        );
    }
}

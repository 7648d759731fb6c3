//! Raw records - the unvalidated per-source intermediate representation

use crate::identity::RecordId;
use crate::sphere::Sphere;
use serde::{Deserialize, Serialize};

/// One procedural-status event as scraped, date still in source format
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawStatusEvent {
    /// Step description as scraped
    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Raw date string, source-specific format
    #[serde(rename = "data", default)]
    pub date: Option<String>,
}

/// The unvalidated record a collector produces per discovered proposition
///
/// Every field is optional at this stage; collectors fill in what their
/// portal exposes. The wire names match the historical raw dumps so a
/// previously scraped dump replays through the pipeline unchanged.
///
/// A raw record is *complete* when the five mandatory identity fields are
/// present; [`RawRecord::missing_fields`] reports the gaps. Incomplete
/// records must never reach the canonical builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Government tier of the source legislature
    #[serde(rename = "esfera_bruto", default)]
    pub sphere: Option<Sphere>,

    /// Two-letter state code
    #[serde(rename = "uf_bruto", default)]
    pub state: Option<String>,

    /// Municipality name (absent for state assemblies)
    #[serde(rename = "municipio_bruto", default)]
    pub municipality: Option<String>,

    /// Legislative body name
    #[serde(rename = "casa_legislativa_bruto", default)]
    pub legislative_body: Option<String>,

    /// Stable identifier of the source portal/collector
    #[serde(rename = "slug_bruto", default)]
    pub source_slug: Option<String>,

    /// Document type, e.g. "Projeto de Lei"
    #[serde(rename = "tipo_bruto", default)]
    pub doc_type: Option<String>,

    /// Document number within the source and year
    #[serde(rename = "numero_bruto", default)]
    pub number: Option<String>,

    /// Document year
    #[serde(rename = "ano_bruto", default)]
    pub year: Option<String>,

    /// Title as scraped
    #[serde(rename = "titulo_bruto", default)]
    pub title: Option<String>,

    /// Summary text (ementa)
    #[serde(rename = "ementa_bruto", default)]
    pub summary: Option<String>,

    /// Author strings, possibly "Name (PARTY)" encoded
    #[serde(rename = "autores_bruto", default)]
    pub authors: Vec<String>,

    /// Document date, raw source-specific format
    #[serde(rename = "data_documento_bruto", default)]
    pub document_date: Option<String>,

    /// Procedural-status history as scraped
    #[serde(rename = "status_bruto", default)]
    pub status_events: Vec<RawStatusEvent>,

    /// Subject tags, when the portal exposes them directly
    #[serde(rename = "assuntos_bruto", default)]
    pub subjects: Vec<String>,

    /// URL of the source detail page the record was scraped from
    #[serde(rename = "url_bruto", default)]
    pub origin_url: Option<String>,

    /// Direct URL of the original document file, when the portal exposes
    /// one distinct from the detail page
    #[serde(rename = "url_documento_original", default)]
    pub document_url: Option<String>,

    /// File URLs to fetch for the original-document artifact
    #[serde(rename = "file_urls", default)]
    pub file_urls: Vec<String>,

    /// Original-document path pre-computed by multi-stage collectors
    #[serde(rename = "caminho_arquivo_original", default)]
    pub original_path: Option<String>,

    /// Scrape timestamp, ISO-8601
    #[serde(rename = "data_raspagem_bruto", default)]
    pub scraped_at: Option<String>,

    /// Content-addressed identity from the detail-page URL
    #[serde(rename = "uuid", default)]
    pub id: Option<RecordId>,
}

/// Raw wire names of the five mandatory identity fields, in check order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "casa_legislativa_bruto",
    "tipo_bruto",
    "numero_bruto",
    "ano_bruto",
    "url_bruto",
];

impl RawRecord {
    /// Names of mandatory fields that are empty or absent
    ///
    /// These are the minimum a collector must fill for the pipeline to
    /// produce a canonical record.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fn empty(v: &Option<String>) -> bool {
            v.as_deref().map(str::trim).unwrap_or("").is_empty()
        }

        let checks = [
            (REQUIRED_FIELDS[0], empty(&self.legislative_body)),
            (REQUIRED_FIELDS[1], empty(&self.doc_type)),
            (REQUIRED_FIELDS[2], empty(&self.number)),
            (REQUIRED_FIELDS[3], empty(&self.year)),
            (REQUIRED_FIELDS[4], empty(&self.origin_url)),
        ];
        checks
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }

    /// Whether all mandatory identity fields are filled
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Human-readable natural key for diagnostics, e.g. "Projeto de Lei 123/2024"
    pub fn natural_key(&self) -> String {
        format!(
            "{} {}/{}",
            self.doc_type.as_deref().unwrap_or("?"),
            self.number.as_deref().unwrap_or("?"),
            self.year.as_deref().unwrap_or("?"),
        )
    }

    /// Whether an original document exists to fetch for this record
    ///
    /// True iff the record carries a direct document URL or at least one
    /// file URL. The detail-page URL alone does not count; some portals
    /// expose inline text and no document file.
    pub fn has_document(&self) -> bool {
        !self.document_url.as_deref().map(str::trim).unwrap_or("").is_empty()
            || !self.file_urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> RawRecord {
        RawRecord {
            legislative_body: Some("Câmara Municipal do Rio de Janeiro".to_string()),
            doc_type: Some("Projeto de Lei".to_string()),
            number: Some("123".to_string()),
            year: Some("2024".to_string()),
            origin_url: Some("https://example.gov.br/doc/123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_has_no_missing_fields() {
        assert!(complete_record().is_complete());
        assert!(complete_record().missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_reports_exact_names() {
        let mut record = complete_record();
        record.number = None;
        record.origin_url = Some("   ".to_string());

        assert_eq!(record.missing_fields(), vec!["numero_bruto", "url_bruto"]);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_empty_record_misses_everything() {
        let record = RawRecord::default();
        assert_eq!(record.missing_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_has_document() {
        let mut record = complete_record();
        // A detail-page URL alone is not a document
        assert!(!record.has_document());

        record.document_url = Some("https://example.gov.br/doc/123.pdf".to_string());
        assert!(record.has_document());

        record.document_url = None;
        record.file_urls = vec!["https://example.gov.br/doc.pdf".to_string()];
        assert!(record.has_document());
    }

    #[test]
    fn test_raw_wire_names_round_trip() {
        let json = r#"{
            "casa_legislativa_bruto": "Câmara Municipal de São Paulo",
            "tipo_bruto": "Projeto de Lei",
            "numero_bruto": "45",
            "ano_bruto": "2025",
            "url_bruto": "https://example.gov.br/45",
            "autores_bruto": ["Ver. João Silva (PT)"],
            "status_bruto": [{"descricao": "Em pauta", "data": "01/02/2025"}]
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_complete());
        assert_eq!(record.authors.len(), 1);
        assert_eq!(record.status_events[0].description, "Em pauta");
    }
}

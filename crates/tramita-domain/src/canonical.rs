//! Canonical records - the normalized, sink-ready representation

use crate::date::DateValue;
use crate::sphere::Sphere;
use serde::{Deserialize, Serialize};

/// Location block of a canonical record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    /// Government tier (null when the collector did not report one)
    #[serde(rename = "esfera")]
    pub sphere: Option<Sphere>,

    /// Municipality (null for state assemblies)
    #[serde(rename = "municipio")]
    pub municipality: Option<String>,

    /// Two-letter state code
    #[serde(rename = "estado")]
    pub state: String,
}

/// One author of a proposition, party affiliation when known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name, honorifics stripped
    #[serde(rename = "nome")]
    pub name: String,

    /// Party acronym, upper-cased
    #[serde(rename = "partido")]
    pub party: Option<String>,
}

/// One normalized procedural-status event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Step description, tidied
    #[serde(rename = "descricao")]
    pub description: String,

    /// Event date after normalization
    #[serde(rename = "data")]
    pub date: DateValue,
}

/// The normalized output record, one JSON object per dataset line
///
/// Field names follow the historical wire schema. Artifact paths are pure
/// functions of the record's identity: equal identities always resolve to
/// byte-identical paths, which is what makes re-runs idempotent. A record
/// with no original document carries a null original path, never a
/// placeholder.
///
/// A canonical record is created once and mutated at most once, by the
/// optional text/subject enrichment pass; after it reaches the dataset sink
/// it is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Where the source legislature sits
    #[serde(rename = "localidade")]
    pub locality: Locality,

    /// Legislative body name
    #[serde(rename = "casa_legislativa")]
    pub legislative_body: String,

    /// Document type, e.g. "Projeto de Lei"
    #[serde(rename = "tipo_documento")]
    pub doc_type: String,

    /// Document number, string-coerced
    #[serde(rename = "numero_documento")]
    pub number: String,

    /// Document date after normalization
    #[serde(rename = "data_documento")]
    pub document_date: DateValue,

    /// Authors with party affiliation split out
    #[serde(rename = "autores")]
    pub authors: Vec<Author>,

    /// Summary text (ementa)
    #[serde(rename = "ementa")]
    pub summary: Option<String>,

    /// Subject tags, scraped or classifier-derived
    #[serde(rename = "assuntos")]
    pub subjects: Vec<String>,

    /// Procedural-status history, most recent events
    #[serde(rename = "status_tramitacao")]
    pub status_events: Vec<StatusEvent>,

    /// Canonical URL to the original source document
    #[serde(rename = "url_documento_original")]
    pub origin_url: String,

    /// Relative path of the archived original document, null when none exists
    #[serde(rename = "caminho_arquivo_original")]
    pub original_path: Option<String>,

    /// Relative path of the archived derived-text file
    #[serde(rename = "caminho_arquivo_texto")]
    pub text_path: String,

    /// Scrape timestamp, ISO-8601
    #[serde(rename = "data_raspagem")]
    pub scraped_at: Option<String>,
}

impl CanonicalRecord {
    /// Human-readable natural key for diagnostics
    pub fn natural_key(&self) -> String {
        format!("{} {}", self.doc_type, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalRecord {
        CanonicalRecord {
            locality: Locality {
                sphere: Some(Sphere::Municipal),
                municipality: Some("Rio de Janeiro".to_string()),
                state: "RJ".to_string(),
            },
            legislative_body: "Câmara Municipal do Rio de Janeiro".to_string(),
            doc_type: "Projeto de Lei".to_string(),
            number: "123".to_string(),
            document_date: DateValue::Missing,
            authors: vec![Author {
                name: "João Silva".to_string(),
                party: Some("PT".to_string()),
            }],
            summary: Some("Dispõe sobre...".to_string()),
            subjects: vec![],
            status_events: vec![],
            origin_url: "https://example.gov.br/123".to_string(),
            original_path: None,
            text_path: "rj/rio-de-janeiro/src/projeto-de-lei-123-2024.md".to_string(),
            scraped_at: None,
        }
    }

    #[test]
    fn test_wire_schema_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "localidade",
            "casa_legislativa",
            "tipo_documento",
            "numero_documento",
            "data_documento",
            "autores",
            "ementa",
            "assuntos",
            "status_tramitacao",
            "url_documento_original",
            "caminho_arquivo_original",
            "caminho_arquivo_texto",
            "data_raspagem",
        ] {
            assert!(obj.contains_key(key), "missing wire field {}", key);
        }
        assert_eq!(json["localidade"]["esfera"], "MUNICIPAL");
        assert_eq!(json["autores"][0]["nome"], "João Silva");
        assert_eq!(json["autores"][0]["partido"], "PT");
        assert!(json["caminho_arquivo_original"].is_null());
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample();
        let line = serde_json::to_string(&record).unwrap();
        let back: CanonicalRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(record, back);
    }
}

//! Record identity - content-addressed from the source detail-page URL

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a harvested record
///
/// Derived as a UUIDv5 over the detail-page URL, so the same proposition
/// discovered on a re-run resolves to the same identity without any
/// coordination between crawl processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Derive the identity for a source detail-page URL
    ///
    /// # Examples
    ///
    /// ```
    /// use tramita_domain::RecordId;
    ///
    /// let a = RecordId::from_url("https://example.gov.br/proposicao/123");
    /// let b = RecordId::from_url("https://example.gov.br/proposicao/123");
    /// assert_eq!(a, b);
    /// ```
    pub fn from_url(url: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()))
    }

    /// Parse a RecordId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid record id: {}", e))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RecordId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

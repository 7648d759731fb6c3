//! Document dates - parsed ISO value or source-language passthrough

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A document date as it survives normalization
///
/// Source portals disagree wildly on date formats and some expose prose
/// instead of a date. Normalization never fails on a date; instead the
/// outcome is kept explicit so downstream consumers can tell an ISO value
/// from passthrough source text.
///
/// On the wire this serializes exactly like the historical dataset:
/// `Parsed` as `YYYY-MM-DD`, `Unparsed` as the original string, `Missing`
/// as null.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateValue {
    /// Successfully normalized to a calendar date
    Parsed(NaiveDate),

    /// Normalization failed; the original source string is kept as-is
    Unparsed(String),

    /// The source exposed no date at all
    #[default]
    Missing,
}

impl DateValue {
    /// The calendar date, when normalization succeeded
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Parsed(d) => Some(*d),
            _ => None,
        }
    }

    /// The ISO `YYYY-MM-DD` form, when normalization succeeded
    pub fn iso(&self) -> Option<String> {
        self.as_date().map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Whether any value (parsed or passthrough) is present
    pub fn is_present(&self) -> bool {
        !matches!(self, DateValue::Missing)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateValue::Parsed(d) => {
                serializer.serialize_str(&d.format("%Y-%m-%d").to_string())
            }
            DateValue::Unparsed(s) => serializer.serialize_str(s),
            DateValue::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw {
            None => DateValue::Missing,
            Some(s) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Ok(d) => DateValue::Parsed(d),
                Err(_) => DateValue::Unparsed(s),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_serializes_as_iso_string() {
        let v = DateValue::Parsed(NaiveDate::from_ymd_opt(2025, 10, 27).unwrap());
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"2025-10-27\"");
    }

    #[test]
    fn test_unparsed_passes_through() {
        let v = DateValue::Unparsed("not a date".to_string());
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"not a date\"");
    }

    #[test]
    fn test_missing_serializes_as_null() {
        assert_eq!(serde_json::to_string(&DateValue::Missing).unwrap(), "null");
    }

    #[test]
    fn test_deserialize_distinguishes_cases() {
        let parsed: DateValue = serde_json::from_str("\"2024-01-02\"").unwrap();
        assert!(parsed.as_date().is_some());

        let unparsed: DateValue = serde_json::from_str("\"27 de outubro\"").unwrap();
        assert_eq!(unparsed, DateValue::Unparsed("27 de outubro".to_string()));

        let missing: DateValue = serde_json::from_str("null").unwrap();
        assert_eq!(missing, DateValue::Missing);
    }
}

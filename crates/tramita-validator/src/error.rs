//! Error types for record validation

use thiserror::Error;

/// A raw record lacked one or more mandatory identity fields
///
/// Carries exactly the raw wire names of the absent fields, plus the
/// record's natural key for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {natural_key} dropped, missing fields: {missing:?}")]
pub struct MissingFieldsError {
    /// Natural key of the dropped record, for log correlation
    pub natural_key: String,

    /// Raw wire names of the absent mandatory fields
    pub missing: Vec<&'static str>,
}

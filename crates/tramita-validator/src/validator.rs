//! Completeness validation logic

use crate::error::MissingFieldsError;
use tramita_domain::RawRecord;
use tracing::warn;

/// Validate a raw record's mandatory identity fields
///
/// Returns the unchanged record on success. On failure the record must be
/// dropped from the pipeline; the error names exactly the missing fields
/// and the drop is logged with the record's natural key.
pub fn validate(record: RawRecord) -> Result<RawRecord, MissingFieldsError> {
    let missing = record.missing_fields();
    if missing.is_empty() {
        return Ok(record);
    }

    let err = MissingFieldsError {
        natural_key: record.natural_key(),
        missing,
    };
    warn!(
        natural_key = %err.natural_key,
        missing = ?err.missing,
        "dropping incomplete raw record"
    );
    Err(err)
}

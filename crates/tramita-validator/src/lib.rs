//! Tramita Validator
//!
//! Completeness gate between collectors and the canonical builder.
//!
//! A raw record must carry the five mandatory identity fields (legislative
//! body, document type, number, year, origin URL) before it may be
//! normalized. Records failing the check are dropped from the pipeline and
//! logged; incompleteness is a source-data defect, not a transient fault,
//! so dropped records are never retried.
//!
//! # Examples
//!
//! ```
//! use tramita_domain::RawRecord;
//! use tramita_validator::validate;
//!
//! let record = RawRecord::default();
//! let err = validate(record).unwrap_err();
//! assert_eq!(err.missing.len(), 5);
//! ```

#![warn(missing_docs)]

mod error;
mod validator;

pub use error::MissingFieldsError;
pub use validator::validate;

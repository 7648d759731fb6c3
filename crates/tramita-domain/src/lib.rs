//! Tramita Domain Layer
//!
//! This crate contains the data model shared by every stage of the harvest
//! pipeline. It carries almost no infrastructure: serde for the wire schema,
//! uuid for record identity, chrono for dates.
//!
//! ## Key Concepts
//!
//! - **RawRecord**: the unvalidated per-source intermediate record, exactly
//!   as a collector scraped it
//! - **CanonicalRecord**: the normalized, sink-ready record with stable
//!   artifact paths
//! - **DateValue**: parsed-or-passthrough document date, so consumers can
//!   tell an ISO date from source-language prose
//! - **CrawlCursor**: explicit limit/date-range cutoff context threaded
//!   through pagination
//! - **RecordId**: content-addressed identity derived from the detail-page
//!   URL
//!
//! ## Architecture
//!
//! Trait definitions for all external interactions live in [`traits`];
//! infrastructure implementations live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod cursor;
pub mod date;
pub mod identity;
pub mod record;
pub mod sphere;
pub mod traits;

// Re-exports for convenience
pub use canonical::{Author, CanonicalRecord, Locality, StatusEvent};
pub use cursor::CrawlCursor;
pub use date::DateValue;
pub use identity::RecordId;
pub use record::{RawRecord, RawStatusEvent};
pub use sphere::Sphere;

//! Run counters for the operator-facing report

use std::fmt;

/// Counts accumulated over one harvest run
///
/// Per-record failures never abort a run; they land here instead and are
/// reported once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw records received from collectors
    pub collected: usize,

    /// Records dropped for missing mandatory fields
    pub dropped: usize,

    /// Records dropped by the date-range filter
    pub out_of_range: usize,

    /// Canonical records written to the dataset
    pub written: usize,

    /// Original documents stored
    pub documents_stored: usize,

    /// Derived-text artifacts written
    pub texts_written: usize,

    /// Enrichment calls that degraded to empty
    pub enrichment_failures: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} collected, {} dropped (incomplete), {} out of range, {} written, \
             {} documents stored, {} texts written, {} enrichment failures",
            self.collected,
            self.dropped,
            self.out_of_range,
            self.written,
            self.documents_stored,
            self.texts_written,
            self.enrichment_failures,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reports_all_counts() {
        let summary = RunSummary {
            collected: 10,
            dropped: 2,
            out_of_range: 1,
            written: 7,
            documents_stored: 5,
            texts_written: 4,
            enrichment_failures: 1,
        };
        let text = summary.to_string();
        assert!(text.contains("10 collected"));
        assert!(text.contains("2 dropped"));
        assert!(text.contains("7 written"));
    }
}

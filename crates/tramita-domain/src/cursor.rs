//! Crawl cursor - explicit limit and date-range cutoff state
//!
//! Collectors paginate until the cursor reports cutoff. The cursor is a
//! plain value threaded through each pagination call, so several sources can
//! crawl concurrently in one process without ambient counters.

use chrono::NaiveDate;

/// Pagination context for one source run
///
/// Tracks how many records have been admitted and whether the run-level
/// item limit or date-range boundary has been hit. Cancellation is
/// cooperative: once [`CrawlCursor::cutoff_reached`] turns true, in-flight
/// work drains but no new pages should be fetched.
#[derive(Debug, Clone, Default)]
pub struct CrawlCursor {
    limit: Option<usize>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    seen: usize,
    cutoff: bool,
}

impl CrawlCursor {
    /// Create a cursor with an optional item cap and inclusive date bounds
    pub fn new(
        limit: Option<usize>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            limit,
            start_date,
            end_date,
            seen: 0,
            cutoff: false,
        }
    }

    /// Count one admitted record; flips cutoff when the limit is reached
    pub fn record_seen(&mut self) {
        self.seen += 1;
        if let Some(limit) = self.limit {
            if self.seen >= limit {
                self.cutoff = true;
            }
        }
    }

    /// Records admitted so far
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Whether no further pages should be fetched
    pub fn cutoff_reached(&self) -> bool {
        self.cutoff
    }

    /// Force the cutoff, e.g. when a date-ordered listing walks past the range
    pub fn mark_cutoff(&mut self) {
        self.cutoff = true;
    }

    /// Whether a document date falls inside the configured range
    ///
    /// Bounds are inclusive. A record with no parseable date is not
    /// *strictly* outside the range, so it passes.
    pub fn in_range(&self, date: Option<NaiveDate>) -> bool {
        let Some(date) = date else { return true };
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        true
    }

    /// The configured inclusive start bound
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// The configured inclusive end bound
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_limit_flips_cutoff() {
        let mut cursor = CrawlCursor::new(Some(2), None, None);
        assert!(!cursor.cutoff_reached());
        cursor.record_seen();
        assert!(!cursor.cutoff_reached());
        cursor.record_seen();
        assert!(cursor.cutoff_reached());
        assert_eq!(cursor.seen(), 2);
    }

    #[test]
    fn test_no_limit_never_cuts_off() {
        let mut cursor = CrawlCursor::new(None, None, None);
        for _ in 0..1000 {
            cursor.record_seen();
        }
        assert!(!cursor.cutoff_reached());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let cursor = CrawlCursor::new(
            None,
            Some(date(2024, 1, 1)),
            Some(date(2024, 12, 31)),
        );
        assert!(cursor.in_range(Some(date(2024, 1, 1))));
        assert!(cursor.in_range(Some(date(2024, 12, 31))));
        assert!(!cursor.in_range(Some(date(2023, 12, 31))));
        assert!(!cursor.in_range(Some(date(2025, 1, 1))));
    }

    #[test]
    fn test_unknown_date_passes_range() {
        let cursor = CrawlCursor::new(None, Some(date(2024, 1, 1)), None);
        assert!(cursor.in_range(None));
    }

    #[test]
    fn test_explicit_cutoff() {
        let mut cursor = CrawlCursor::new(None, None, None);
        cursor.mark_cutoff();
        assert!(cursor.cutoff_reached());
    }
}

//! Domain types shared across the pipeline.

use std::fmt;

/// Outcome of a single test case as recorded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => f.write_str("Passed"),
            Outcome::Failed => f.write_str("Failed"),
        }
    }
}

/// One `<testcase>` element as read from the report, before extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTestCase {
    pub name: String,
    /// True when the element carried a `<failure>` or `<error>` child.
    pub failed: bool,
}

/// A test case whose name carried a work-item identifier.
///
/// Records are immutable once extracted. Duplicate identifiers are allowed
/// and are updated independently, one attempt each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub case_id: u64,
    pub raw_name: String,
    pub outcome: Outcome,
}

/// Counters for the terminal summary block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    /// Summary before any update attempt: `total` covers every case in the
    /// report and cases without a usable identifier are already skipped.
    /// A case-free report counts as a single skip.
    pub fn seeded(cases: usize, extracted: usize) -> Self {
        let skipped = if cases == 0 {
            1
        } else {
            cases.saturating_sub(extracted)
        };
        Self {
            total: cases,
            success: 0,
            failed: 0,
            skipped,
        }
    }

    /// Mark every extracted record skipped (run aborted before updates).
    pub fn skip_remaining(&mut self, extracted: usize) {
        self.skipped += extracted;
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- run summary ----")?;
        writeln!(f, "  total:   {}", self.total)?;
        writeln!(f, "  success: {}", self.success)?;
        writeln!(f, "  failed:  {}", self.failed)?;
        write!(f, "  skipped: {}", self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_counts_unmatched_cases_as_skipped() {
        let summary = RunSummary::seeded(5, 3);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.success, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn seeded_empty_report_counts_one_skip() {
        let summary = RunSummary::seeded(0, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.success, 0);
    }

    #[test]
    fn seeded_no_matches_skips_every_case() {
        let summary = RunSummary::seeded(4, 0);
        assert_eq!(summary.skipped, 4);
    }

    #[test]
    fn skip_remaining_adds_extracted_records() {
        let mut summary = RunSummary::seeded(3, 2);
        summary.skip_remaining(2);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.success, 0);
    }

    #[test]
    fn summary_block_renders_all_counters() {
        let summary = RunSummary {
            total: 2,
            success: 2,
            failed: 0,
            skipped: 0,
        };
        let block = summary.to_string();
        assert!(block.contains("total:   2"));
        assert!(block.contains("success: 2"));
        assert!(block.contains("failed:  0"));
        assert!(block.contains("skipped: 0"));
    }
}

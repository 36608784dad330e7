//! Identifier extraction from test-case names.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Outcome, RawTestCase, TestRecord};

/// Matches the literal `TC ID:` prefix in any case, followed by an
/// identifier of at least six digits.
fn case_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)TC ID:\s*([0-9]{6,})").expect("case id pattern"))
}

/// Derive update records from raw test cases, preserving order and
/// duplicates. Cases whose name carries no usable identifier are skipped,
/// never treated as an error.
pub fn extract_records(cases: &[RawTestCase]) -> Vec<TestRecord> {
    cases
        .iter()
        .filter_map(|case| {
            let Some(caps) = case_id_pattern().captures(&case.name) else {
                debug!(name = %case.name, "no case identifier in name, skipping");
                return None;
            };
            // Identifiers longer than u64 can't address a work item.
            let case_id = match caps[1].parse::<u64>() {
                Ok(id) => id,
                Err(_) => {
                    debug!(name = %case.name, "case identifier out of range, skipping");
                    return None;
                }
            };
            let outcome = if case.failed {
                Outcome::Failed
            } else {
                Outcome::Passed
            };
            Some(TestRecord {
                case_id,
                raw_name: case.name.clone(),
                outcome,
            })
        })
        .collect()
}

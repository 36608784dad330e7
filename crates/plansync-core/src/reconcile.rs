//! Reconcile engine: one automation update per record, strictly in order.

use std::fmt;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::model::{RunSummary, TestRecord};

/// Phase of the two-step work-item update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    /// Writing the automation metadata fields.
    Metadata,
    /// Touching the last-modified timestamp so the service recomputes its
    /// derived automation status.
    Timestamp,
}

impl fmt::Display for UpdatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePhase::Metadata => f.write_str("metadata"),
            UpdatePhase::Timestamp => f.write_str("timestamp"),
        }
    }
}

/// Failure of a single work-item update.
///
/// `phase` records how far the update got: a `Timestamp` failure means the
/// metadata fields were already applied and stay applied. There is no
/// rollback and no retry.
#[derive(Debug, thiserror::Error)]
#[error("{phase} update failed: {message}")]
pub struct AutomationError {
    pub phase: UpdatePhase,
    pub message: String,
}

/// Remote side of the reconcile loop.
///
/// One call covers both update phases for one work item; implementations
/// report partial failure through [`AutomationError::phase`].
#[async_trait]
pub trait AutomationSink {
    /// Apply automation metadata for `record` under the given test id token,
    /// then touch the work item's last-modified timestamp.
    async fn push_automation(
        &self,
        record: &TestRecord,
        test_id: &str,
    ) -> Result<(), AutomationError>;
}

/// Process `records` one at a time, in input order, tallying into `summary`.
///
/// Each record gets a fresh v4 token. A failed update is logged and counted;
/// it never stops the loop.
pub async fn reconcile<S>(sink: &S, records: &[TestRecord], summary: &mut RunSummary)
where
    S: AutomationSink + ?Sized,
{
    for record in records {
        let test_id = Uuid::new_v4().to_string();
        info!(
            case_id = record.case_id,
            outcome = %record.outcome,
            "updating work item"
        );
        match sink.push_automation(record, &test_id).await {
            Ok(()) => summary.record_success(),
            Err(e) => {
                warn!(
                    case_id = record.case_id,
                    phase = %e.phase,
                    error = %e,
                    "work item update failed"
                );
                summary.record_failure();
            }
        }
    }
}

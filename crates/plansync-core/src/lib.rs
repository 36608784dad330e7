//! Core pipeline for plansync: JUnit report reading, identifier extraction,
//! and the reconcile engine that pushes one automation update per record
//! through an [`AutomationSink`].
//!
//! This crate has no HTTP knowledge; the service client lives in
//! `plansync-devops` and plugs in at the [`AutomationSink`] seam.

pub mod extract;
pub mod model;
pub mod reconcile;
pub mod report;

pub use extract::extract_records;
pub use model::{Outcome, RawTestCase, RunSummary, TestRecord};
pub use reconcile::{reconcile, AutomationError, AutomationSink, UpdatePhase};
pub use report::{parse_report, ReportError};

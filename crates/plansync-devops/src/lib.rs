//! Client for an Azure-DevOps-shaped test-management REST API.
//!
//! This crate provides:
//!
//! - an authenticated HTTP client addressed by organization/project/plan
//! - suite resolution by exact name and test-point listing
//! - the two-phase work-item automation update behind
//!   [`plansync_core::AutomationSink`]
//!
//! # Quick Start
//!
//! ```no_run
//! use plansync_devops::{Credential, DevOpsConfig, PlanClient};
//!
//! # async fn example() -> plansync_devops::DevOpsResult<()> {
//! let config = DevOpsConfig::new("fabrikam", "webshop", Credential::new("pat"));
//! let client = PlanClient::new(config)?;
//!
//! let suite = client.resolve_suite(12, "Regression").await?;
//! let points = client.list_points(12, suite.id).await?;
//! println!("suite {} has {} points", suite.id, points.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! The personal access token is sent as a standard `Basic` authorization
//! header; [`Credential`] never reveals more than its first and last two
//! characters in any rendered form.
//!
//! No call is retried: transport and remote failures surface exactly once,
//! and the caller decides what a failure means for the run.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::Credential;
pub use client::PlanClient;
pub use error::{DevOpsError, DevOpsResult};
pub use types::{
    DevOpsConfig, PatchOp, PointMap, Suite, TestCaseRef, TestPoint, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};

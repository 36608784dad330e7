//! Configuration and wire types for the test-plan service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::auth::Credential;

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, built once at startup and handed to the client
/// whole. Nothing is read from ambient state after construction.
#[derive(Debug, Clone)]
pub struct DevOpsConfig {
    /// Service base URL, without organization or project segments.
    pub base_url: String,
    pub organization: String,
    pub project: String,
    pub credential: Credential,
    pub timeout_secs: u64,
}

impl DevOpsConfig {
    pub fn new(
        organization: impl Into<String>,
        project: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: organization.into(),
            project: project.into(),
            credential,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the base URL (tests point this at a local server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// `{base}/{organization}/{project}`, no trailing slash.
    pub(crate) fn project_base(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.organization,
            self.project
        )
    }
}

/// One suite under a plan, as listed by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Suite {
    pub id: u64,
    pub name: String,
}

/// Envelope the service wraps list responses in.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListResponse<T> {
    pub value: Vec<T>,
}

/// A test point binding a test case to a suite.
#[derive(Debug, Clone, Deserialize)]
pub struct TestPoint {
    pub id: u64,
    #[serde(rename = "testCase")]
    pub test_case: TestCaseRef,
}

/// Work-item reference carried by a test point. The service returns the id
/// as a decimal string.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCaseRef {
    pub id: String,
}

/// Map from test-case (work item) id to point id.
pub type PointMap = HashMap<u64, u64>;

/// One json-patch operation against a work item.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOp {
    pub op: &'static str,
    pub path: String,
    pub value: String,
}

impl PatchOp {
    /// `add` on `/fields/{field}`.
    pub fn set_field(field: &str, value: impl Into<String>) -> Self {
        Self {
            op: "add",
            path: format!("/fields/{field}"),
            value: value.into(),
        }
    }
}

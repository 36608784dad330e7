//! Test-plan service client.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use plansync_core::{AutomationError, AutomationSink, TestRecord, UpdatePhase};

use crate::error::{DevOpsError, DevOpsResult};
use crate::types::{DevOpsConfig, ListResponse, PatchOp, PointMap, Suite, TestPoint};

mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("plansync/", env!("CARGO_PKG_VERSION"));

const API_VERSION: &str = "5.0";

/// Json-patch media type required by the work-item endpoints.
const PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

const FIELD_TEST_ID: &str = "Microsoft.VSTS.TCM.AutomatedTestId";
const FIELD_TEST_NAME: &str = "Microsoft.VSTS.TCM.AutomatedTestName";
const FIELD_TEST_STORAGE: &str = "Microsoft.VSTS.TCM.AutomatedTestStorage";
const FIELD_TEST_TYPE: &str = "Microsoft.VSTS.TCM.AutomatedTestType";
const FIELD_CHANGED_DATE: &str = "System.ChangedDate";

const TEST_STORAGE: &str = "Newman";
const TEST_TYPE: &str = "API Test";

/// Client for suite resolution, point listing and work-item updates.
#[derive(Debug, Clone)]
pub struct PlanClient {
    http: HttpBackend,
}

impl PlanClient {
    pub fn new(config: DevOpsConfig) -> DevOpsResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| DevOpsError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend {
                client,
                project_base: config.project_base(),
                credential: config.credential,
            },
        })
    }

    /// List all suites under a plan.
    pub async fn list_suites(&self, plan_id: u64) -> DevOpsResult<Vec<Suite>> {
        let url = format!(
            "{}/_apis/test/Plans/{}/suites?api-version={}",
            self.http.project_base, plan_id, API_VERSION
        );
        debug!(plan_id, "listing suites");

        let response = self.http.get(&url).await?;
        let list: ListResponse<Suite> =
            response
                .json()
                .await
                .map_err(|e| DevOpsError::InvalidResponse {
                    message: format!("failed to parse suite listing: {}", e),
                })?;
        Ok(list.value)
    }

    /// Resolve a suite by exact, case-sensitive name.
    ///
    /// Zero matches and multiple matches are both errors; resolution never
    /// silently picks one of several candidates.
    pub async fn resolve_suite(&self, plan_id: u64, name: &str) -> DevOpsResult<Suite> {
        let suites = self.list_suites(plan_id).await?;
        let mut matches: Vec<Suite> = suites.into_iter().filter(|s| s.name == name).collect();

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(DevOpsError::SuiteNotFound {
                name: name.to_string(),
            }),
            n => Err(DevOpsError::AmbiguousSuite {
                name: name.to_string(),
                count: n,
            }),
        }
    }

    /// Map of test-case id to point id for every point bound to the suite.
    ///
    /// The service returns case ids as decimal strings; entries that do not
    /// parse are dropped from the map, not treated as fatal.
    pub async fn list_points(&self, plan_id: u64, suite_id: u64) -> DevOpsResult<PointMap> {
        let url = format!(
            "{}/_apis/test/Plans/{}/suites/{}/points?api-version={}",
            self.http.project_base, plan_id, suite_id, API_VERSION
        );
        debug!(plan_id, suite_id, "listing test points");

        let response = self.http.get(&url).await?;
        let list: ListResponse<TestPoint> =
            response
                .json()
                .await
                .map_err(|e| DevOpsError::InvalidResponse {
                    message: format!("failed to parse point listing: {}", e),
                })?;

        let mut points = PointMap::new();
        for point in list.value {
            match point.test_case.id.parse::<u64>() {
                Ok(case_id) => {
                    points.insert(case_id, point.id);
                }
                Err(_) => {
                    warn!(
                        point_id = point.id,
                        case_id = %point.test_case.id,
                        "point carries a non-numeric case id, ignoring"
                    );
                }
            }
        }
        Ok(points)
    }

    /// Patch a work item's fields.
    ///
    /// `bypass_rules` lets a patch write service-managed fields such as the
    /// last-modified timestamp.
    pub async fn update_work_item(
        &self,
        item_id: u64,
        ops: &[PatchOp],
        bypass_rules: bool,
    ) -> DevOpsResult<()> {
        let bypass = if bypass_rules { "&bypassRules=true" } else { "" };
        let url = format!(
            "{}/_apis/wit/workitems/{}?api-version={}{}",
            self.http.project_base, item_id, API_VERSION, bypass
        );
        let body = serde_json::to_vec(ops).map_err(|e| DevOpsError::InvalidResponse {
            message: format!("failed to encode patch body: {}", e),
        })?;

        self.http.patch(&url, PATCH_CONTENT_TYPE, body).await?;
        Ok(())
    }

    pub fn project_base(&self) -> &str {
        &self.http.project_base
    }
}

fn automation_ops(record: &TestRecord, test_id: &str) -> Vec<PatchOp> {
    vec![
        PatchOp::set_field(FIELD_TEST_ID, test_id),
        PatchOp::set_field(FIELD_TEST_NAME, record.raw_name.clone()),
        PatchOp::set_field(FIELD_TEST_STORAGE, TEST_STORAGE),
        PatchOp::set_field(FIELD_TEST_TYPE, TEST_TYPE),
    ]
}

#[async_trait]
impl AutomationSink for PlanClient {
    /// Two sequential patches against the record's work item: automation
    /// metadata, then a timestamp touch that makes the service recompute its
    /// derived automation status. A timestamp failure leaves the metadata
    /// applied; nothing is rolled back or retried.
    async fn push_automation(
        &self,
        record: &TestRecord,
        test_id: &str,
    ) -> Result<(), AutomationError> {
        self.update_work_item(record.case_id, &automation_ops(record, test_id), false)
            .await
            .map_err(|e| AutomationError {
                phase: UpdatePhase::Metadata,
                message: e.to_string(),
            })?;

        let touch = [PatchOp::set_field(FIELD_CHANGED_DATE, Utc::now().to_rfc3339())];
        self.update_work_item(record.case_id, &touch, true)
            .await
            .map_err(|e| AutomationError {
                phase: UpdatePhase::Timestamp,
                message: e.to_string(),
            })?;

        Ok(())
    }
}

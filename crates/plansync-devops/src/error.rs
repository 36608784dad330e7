//! Error types for the test-plan service client.

/// Client errors. No variant is retried.
#[derive(Debug, thiserror::Error)]
pub enum DevOpsError {
    /// Credential rejected by the service.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The addressed resource does not exist.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// The suite name matched nothing under the plan.
    #[error("suite not found in plan: {name}")]
    SuiteNotFound { name: String },

    /// The suite name matched more than one suite. Resolution requires
    /// exactly one match; first-match-wins is not applied.
    #[error("suite name is ambiguous: {name} ({count} matches)")]
    AmbiguousSuite { name: String, count: usize },

    /// Transport-level failure or unexpected status.
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body did not match the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for DevOpsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations.
pub type DevOpsResult<T> = Result<T, DevOpsError>;

//! HTTP layer: status mapping.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::auth::Credential;
use crate::error::{DevOpsError, DevOpsResult};

/// HTTP backend for making requests (holds reqwest client and credential).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    /// `{base}/{organization}/{project}`, no trailing slash.
    pub(crate) project_base: String,
    pub(crate) credential: Credential,
}

impl HttpBackend {
    pub(crate) async fn get(&self, url: &str) -> DevOpsResult<reqwest::Response> {
        self.send(self.client.get(url), url).await
    }

    pub(crate) async fn patch(
        &self,
        url: &str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> DevOpsResult<reqwest::Response> {
        let request = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.send(request, url).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> DevOpsResult<reqwest::Response> {
        debug!(url = %url, "sending request");
        let response = request
            .header(AUTHORIZATION, self.credential.basic_header())
            .send()
            .await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => Ok(response),

            401 => Err(DevOpsError::Unauthorized {
                message: format!("credential {} rejected by the service", self.credential),
            }),

            404 => Err(DevOpsError::NotFound {
                url: url.to_string(),
            }),

            _ => {
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(DevOpsError::Network {
                    message: format!("HTTP {}: {}", status.as_u16(), message),
                })
            }
        }
    }
}

//! reqwest implementation of [`ServiceClient`].

use super::http_client::build_service_client;
use super::traits::{ServiceClient, ServiceFuture};
use super::types::{
    Acknowledgement, ApprovalsResponse, GenerateResponse, UpdateApprovalRequest,
};
use crate::approvals::{ApprovalEntry, ApprovalStatus};
use crate::error::ServiceError;
use crate::mou::MouRequest;
use crate::pipeline::PipelineResult;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const GENERATE_PATH: &str = "api/generate-draft/";
const APPROVALS_PATH: &str = "api/approvals/";
const UPDATE_APPROVAL_PATH: &str = "api/update-approval/";

const MAX_ERROR_BODY_CHARS: usize = 200;

pub struct HttpServiceClient {
    base_url: Url,
    /// Pre-resolved endpoint URLs.
    generate_url: Url,
    approvals_url: Url,
    update_approval_url: Url,
    client: Client,
}

impl HttpServiceClient {
    /// `base_url` is the service root, e.g. `http://localhost:8000`. A path
    /// prefix is kept: `https://host/mou` resolves to `https://host/mou/api/...`.
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ServiceError::InvalidEndpoint(format!("{normalized}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidEndpoint(normalized));
        }

        let resolve = |path: &str| {
            base_url
                .join(path)
                .map_err(|e| ServiceError::InvalidEndpoint(format!("{path}: {e}")))
        };

        Ok(Self {
            generate_url: resolve(GENERATE_PATH)?,
            approvals_url: resolve(APPROVALS_PATH)?,
            update_approval_url: resolve(UPDATE_APPROVAL_PATH)?,
            base_url,
            client: build_service_client(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn generate_url(&self) -> &str {
        self.generate_url.as_str()
    }

    pub fn approvals_url(&self) -> &str {
        self.approvals_url.as_str()
    }

    pub fn update_approval_url(&self) -> &str {
        self.update_approval_url.as_str()
    }

    async fn execute(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<String, ServiceError> {
        debug!(endpoint, "sending service request");

        let response = request.send().await.map_err(|e| transport(endpoint, &e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| transport(endpoint, &e))?;

        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "service returned an error status");
            return Err(ServiceError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

fn transport(endpoint: &str, err: &reqwest::Error) -> ServiceError {
    warn!(endpoint, error = %err, "service request failed");
    ServiceError::Transport {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    cut.push('…');
    cut
}

impl ServiceClient for HttpServiceClient {
    fn generate<'a>(&'a self, request: &'a MouRequest) -> ServiceFuture<'a, PipelineResult> {
        Box::pin(async move {
            let endpoint = "generate-draft";
            let body = self
                .execute(
                    endpoint,
                    self.client.post(self.generate_url.as_str()).json(request),
                )
                .await?;
            let response: GenerateResponse = decode(endpoint, &body)?;
            Ok(PipelineResult::from(response))
        })
    }

    fn list_approvals(&self) -> ServiceFuture<'_, Vec<ApprovalEntry>> {
        Box::pin(async move {
            let endpoint = "approvals";
            let body = self
                .execute(endpoint, self.client.get(self.approvals_url.as_str()))
                .await?;
            let response: ApprovalsResponse = decode(endpoint, &body)?;
            Ok(response.approvals)
        })
    }

    fn update_approval<'a>(
        &'a self,
        email: &'a str,
        status: ApprovalStatus,
    ) -> ServiceFuture<'a, Acknowledgement> {
        Box::pin(async move {
            let endpoint = "update-approval";
            let body = self
                .execute(
                    endpoint,
                    self.client
                        .post(self.update_approval_url.as_str())
                        .json(&UpdateApprovalRequest { email, status }),
                )
                .await?;
            Ok(Acknowledgement::from_body(&body))
        })
    }
}

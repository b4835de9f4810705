//! Durable HTTP Host - OrchestrationHost over a durable-task webhook API.
//!
//! The external host owns durability, replay and instance history. This
//! adapter only translates the three port operations into HTTP calls and the
//! host's status strings into [`OrchestrationStatus`].
//!
//! # Endpoints
//!
//! | Operation | Request | Success |
//! |---|---|---|
//! | start | `POST {base}/orchestrators/{name}/{id}` | 202 |
//! | status | `GET {base}/instances/{id}` | 200, 202, 400, 500 with a status body |
//! | terminate | `POST {base}/instances/{id}/terminate?reason=` | 202, 410 when already finished |
//!
//! Every call carries the optional system key as the `code` query parameter.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::InstanceId;
use crate::domain::orchestration::{OrchestrationSnapshot, OrchestrationStatus};
use crate::ports::{HostError, OrchestrationHost};

/// Configuration for the durable HTTP host.
#[derive(Debug, Clone)]
pub struct DurableHttpConfig {
    /// Base URL of the webhook API, e.g. `http://localhost:7071/runtime/webhooks/durabletask`.
    pub base_url: String,
    /// System key sent as `code`.
    system_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl DurableHttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            system_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the system key.
    pub fn with_system_key(mut self, key: impl Into<String>) -> Self {
        self.system_key = Some(Secret::new(key.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Status strings as the host reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum HostRuntimeStatus {
    Pending,
    Running,
    ContinuedAsNew,
    Completed,
    Failed,
    Canceled,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl TryFrom<HostRuntimeStatus> for OrchestrationStatus {
    type Error = HostError;

    fn try_from(status: HostRuntimeStatus) -> Result<Self, Self::Error> {
        match status {
            HostRuntimeStatus::Pending => Ok(OrchestrationStatus::Pending),
            HostRuntimeStatus::Running => Ok(OrchestrationStatus::Running),
            HostRuntimeStatus::ContinuedAsNew => Ok(OrchestrationStatus::ContinuedAsNew),
            HostRuntimeStatus::Completed => Ok(OrchestrationStatus::Completed),
            HostRuntimeStatus::Failed => Ok(OrchestrationStatus::Failed),
            HostRuntimeStatus::Canceled => Ok(OrchestrationStatus::Canceled),
            HostRuntimeStatus::Terminated => Ok(OrchestrationStatus::Terminated),
            HostRuntimeStatus::Unknown => {
                Err(HostError::Protocol("unrecognized runtimeStatus".to_string()))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstanceStatusBody {
    runtime_status: HostRuntimeStatus,
    #[serde(default)]
    output: serde_json::Value,
}

impl InstanceStatusBody {
    fn into_snapshot(self) -> Result<OrchestrationSnapshot, HostError> {
        let status = OrchestrationStatus::try_from(self.runtime_status)?;
        let output = match self.output {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        };
        Ok(OrchestrationSnapshot::from_parts(status, output))
    }
}

/// Orchestration host reached over HTTP.
pub struct DurableHttpHost {
    config: DurableHttpConfig,
    base_url: Url,
    client: Client,
}

impl DurableHttpHost {
    /// Creates a host client.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Protocol` if the base URL cannot carry path
    /// segments, or `HostError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: DurableHttpConfig) -> Result<Self, HostError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| HostError::Protocol(format!("Invalid host base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(HostError::Protocol(format!(
                "Host base URL cannot be a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HostError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Builds `{base}/{segments...}` with the system key attached.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, HostError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HostError::Protocol("Host base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        if let Some(key) = &self.config.system_key {
            url.query_pairs_mut().append_pair("code", key.expose_secret());
        }
        Ok(url)
    }

    fn start_url(&self, name: &str, instance_id: &InstanceId) -> Result<Url, HostError> {
        self.endpoint(&["orchestrators", name, instance_id.as_str()])
    }

    fn status_url(&self, instance_id: &InstanceId) -> Result<Url, HostError> {
        self.endpoint(&["instances", instance_id.as_str()])
    }

    fn terminate_url(&self, instance_id: &InstanceId, reason: &str) -> Result<Url, HostError> {
        let mut url = self.endpoint(&["instances", instance_id.as_str(), "terminate"])?;
        url.query_pairs_mut().append_pair("reason", reason);
        Ok(url)
    }

    fn transport_error(&self, e: reqwest::Error) -> HostError {
        if e.is_timeout() {
            HostError::Unavailable(format!(
                "Host timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else if e.is_connect() {
            HostError::Unavailable(format!("Connection failed: {}", e))
        } else {
            HostError::Unavailable(e.to_string())
        }
    }

    async fn unexpected(response: Response) -> HostError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            500..=599 => HostError::Unavailable(format!("Server error {}: {}", status, body)),
            _ => HostError::Protocol(format!("Unexpected status {}: {}", status, body)),
        }
    }
}

#[async_trait]
impl OrchestrationHost for DurableHttpHost {
    async fn start_new(
        &self,
        name: &str,
        instance_id: &InstanceId,
        input: Option<serde_json::Value>,
    ) -> Result<(), HostError> {
        let url = self.start_url(name, instance_id)?;
        let mut request = self.client.post(url);
        if let Some(input) = &input {
            request = request.json(input);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        match response.status() {
            StatusCode::ACCEPTED | StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(HostError::UnknownOrchestration(name.to_string())),
            _ => Err(Self::unexpected(response).await),
        }
    }

    async fn get_status(&self, instance_id: &InstanceId) -> Result<OrchestrationSnapshot, HostError> {
        let url = self.status_url(instance_id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        // Failed and terminated instances come back as 400/500 with a status body
        match response.status() {
            StatusCode::OK
            | StatusCode::ACCEPTED
            | StatusCode::BAD_REQUEST
            | StatusCode::INTERNAL_SERVER_ERROR => {
                let text = response
                    .text()
                    .await
                    .map_err(|e| self.transport_error(e))?;
                let body: InstanceStatusBody = serde_json::from_str(&text).map_err(|e| {
                    HostError::Protocol(format!("Failed to parse status body: {}", e))
                })?;
                body.into_snapshot()
            }
            StatusCode::NOT_FOUND => Err(HostError::NotFound(instance_id.clone())),
            _ => Err(Self::unexpected(response).await),
        }
    }

    async fn terminate(&self, instance_id: &InstanceId, reason: &str) -> Result<(), HostError> {
        let url = self.terminate_url(instance_id, reason)?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        match response.status() {
            StatusCode::ACCEPTED | StatusCode::OK => Ok(()),
            // Already completed, failed or terminated
            StatusCode::GONE => Ok(()),
            StatusCode::NOT_FOUND => Err(HostError::NotFound(instance_id.clone())),
            _ => Err(Self::unexpected(response).await),
        }
    }
}

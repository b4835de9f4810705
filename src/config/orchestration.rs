//! Orchestration host configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Orchestration host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestrationConfig {
    /// Which host runs the long-running task
    #[serde(default)]
    pub backend: OrchestrationBackend,

    /// Base URL of the durable-task webhook API (durable_http backend)
    pub base_url: Option<String>,

    /// System key passed as the `code` query parameter (durable_http backend)
    pub system_key: Option<String>,

    /// Name the long-running orchestration is started under
    #[serde(default = "default_orchestration_name")]
    pub orchestration_name: String,

    /// How long the stand-in activity waits before answering, in seconds
    #[serde(default = "default_task_delay")]
    pub task_delay_secs: u64,

    /// Timeout for calls to the host, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Orchestration host type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationBackend {
    /// Tasks run inside this process and are lost on restart
    #[default]
    InMemory,
    /// Tasks run on an external durable-task host over HTTP
    DurableHttp,
}

impl OrchestrationConfig {
    /// Get task delay as Duration
    pub fn task_delay(&self) -> Duration {
        Duration::from_secs(self.task_delay_secs)
    }

    /// Get host call timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate orchestration configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.orchestration_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ORCHESTRATION__ORCHESTRATION_NAME"));
        }
        if self.task_delay_secs > 3600 {
            return Err(ValidationError::InvalidTaskDelay);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.backend == OrchestrationBackend::DurableHttp {
            let url = self
                .base_url
                .as_deref()
                .ok_or(ValidationError::MissingRequired("ORCHESTRATION__BASE_URL"))?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidHostUrl);
            }
        }

        Ok(())
    }
}

impl Default for OrchestrationConfig {
    fn default() -> Self {
        Self {
            backend: OrchestrationBackend::default(),
            base_url: None,
            system_key: None,
            orchestration_name: default_orchestration_name(),
            task_delay_secs: default_task_delay(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_orchestration_name() -> String {
    "LongTimeOrchestration".to_string()
}

fn default_task_delay() -> u64 {
    20
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestration_defaults() {
        let config = OrchestrationConfig::default();
        assert_eq!(config.backend, OrchestrationBackend::InMemory);
        assert_eq!(config.orchestration_name, "LongTimeOrchestration");
        assert_eq!(config.task_delay(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_durable_http_requires_base_url() {
        let config = OrchestrationConfig {
            backend: OrchestrationBackend::DurableHttp,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("ORCHESTRATION__BASE_URL"))
        ));
    }

    #[test]
    fn test_durable_http_rejects_non_http_url() {
        let config = OrchestrationConfig {
            backend: OrchestrationBackend::DurableHttp,
            base_url: Some("ftp://host".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidHostUrl)));
    }

    #[test]
    fn test_task_delay_upper_bound() {
        let config = OrchestrationConfig {
            task_delay_secs: 7200,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTaskDelay)));
    }

    #[test]
    fn test_backend_deserializes_snake_case() {
        let backend: OrchestrationBackend = serde_json::from_str("\"durable_http\"").unwrap();
        assert_eq!(backend, OrchestrationBackend::DurableHttp);
    }
}

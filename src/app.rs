//! Application wiring - builds the router from configuration.
//!
//! Chooses adapters for each port from `AppConfig` and layers the HTTP
//! router with tracing, timeout and request-id middleware. `main` only loads
//! configuration, installs logging and serves what this module returns.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::cek::CekRequestClient;
use crate::adapters::http::{voice_router, VoiceAppState};
use crate::adapters::orchestration::{DurableHttpConfig, DurableHttpHost, InMemoryOrchestrationHost};
use crate::adapters::signature::HmacSignatureVerifier;
use crate::adapters::task::DelayedTimestampActivity;
use crate::application::handlers::voice::{HandleVoiceRequestHandler, VoiceRequestSettings};
use crate::application::orchestrations::LongTimeOrchestration;
use crate::config::{AppConfig, OrchestrationBackend, OrchestrationConfig, VoiceConfig};
use crate::ports::{HostError, OrchestrationHost, RequestClient};

/// Build the orchestration host selected by `orchestration.backend`.
///
/// # Errors
///
/// Returns `HostError` if the durable host client cannot be created.
pub fn build_host(config: &OrchestrationConfig) -> Result<Arc<dyn OrchestrationHost>, HostError> {
    match config.backend {
        OrchestrationBackend::InMemory => {
            let activity = Arc::new(DelayedTimestampActivity::new(config.task_delay()));
            let orchestration = Arc::new(LongTimeOrchestration::new(
                config.orchestration_name.clone(),
                activity,
            ));
            tracing::info!(
                orchestration = %config.orchestration_name,
                delay_secs = config.task_delay_secs,
                "Using in-process orchestration host"
            );
            Ok(Arc::new(
                InMemoryOrchestrationHost::new().with_orchestration(orchestration),
            ))
        }
        OrchestrationBackend::DurableHttp => {
            let base_url = config
                .base_url
                .clone()
                .ok_or_else(|| HostError::Protocol("orchestration.base_url is not set".to_string()))?;

            let mut host_config = DurableHttpConfig::new(base_url).with_timeout(config.timeout());
            if let Some(key) = &config.system_key {
                host_config = host_config.with_system_key(key.clone());
            }

            tracing::info!(base_url = %host_config.base_url, "Using durable HTTP orchestration host");
            Ok(Arc::new(DurableHttpHost::new(host_config)?))
        }
    }
}

/// Build the request client, with a verifier when a secret is configured.
pub fn build_request_client(config: &VoiceConfig) -> Arc<dyn RequestClient> {
    match &config.signature_secret {
        Some(secret) => Arc::new(CekRequestClient::new(Arc::new(HmacSignatureVerifier::new(
            secret.clone(),
        )))),
        None => {
            if config.skip_request_validation {
                tracing::warn!("Request signature validation is disabled");
            }
            Arc::new(CekRequestClient::without_verifier())
        }
    }
}

/// Build the shared state for the voice routes.
pub fn build_state(config: &AppConfig) -> Result<VoiceAppState, HostError> {
    let host = build_host(&config.orchestration)?;
    let request_client = build_request_client(&config.voice);

    let handler = HandleVoiceRequestHandler::new(
        request_client,
        host,
        VoiceRequestSettings {
            skip_validation: config.voice.skip_request_validation,
            orchestration_name: config.orchestration.orchestration_name.clone(),
        },
    );

    Ok(VoiceAppState::new(
        Arc::new(handler),
        config.voice.signature_header.clone(),
    ))
}

/// Build the complete, layered application router.
pub fn build_router(config: &AppConfig) -> Result<Router, HostError> {
    let state = build_state(config)?;

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id());

    Ok(voice_router().with_state(state).layer(middleware))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_in_memory_router() {
        let config = AppConfig::default();
        assert!(build_router(&config).is_ok());
    }

    #[test]
    fn durable_backend_without_base_url_is_rejected() {
        let config = OrchestrationConfig {
            backend: OrchestrationBackend::DurableHttp,
            ..OrchestrationConfig::default()
        };

        let result = build_host(&config);

        assert!(matches!(result, Err(HostError::Protocol(_))));
    }

    #[test]
    fn durable_backend_with_base_url_builds() {
        let config = OrchestrationConfig {
            backend: OrchestrationBackend::DurableHttp,
            base_url: Some("http://localhost:7071/runtime/webhooks/durabletask".to_string()),
            system_key: Some("key".to_string()),
            ..OrchestrationConfig::default()
        };

        assert!(build_host(&config).is_ok());
    }
}

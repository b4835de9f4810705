//! HandleVoiceRequestHandler - One platform request from bytes to response.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::dispatch::{DispatchError, IntentDispatcher};
use crate::domain::foundation::InstanceId;
use crate::domain::orchestration::{Effect, OrchestrationSnapshot};
use crate::domain::voice::OutgoingResponse;
use crate::ports::{HostError, OrchestrationHost, RequestClient, RequestError};

/// Command carrying the raw platform request
#[derive(Debug, Clone)]
pub struct HandleVoiceRequestCommand {
    pub signature: Option<String>,
    pub body: Vec<u8>,
}

/// Result of handling a request
#[derive(Debug, Clone)]
pub struct HandleVoiceRequestResult {
    pub response: OutgoingResponse,
    pub effect: Effect,
}

/// Error type for handling a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleVoiceRequestError {
    /// Signature or payload rejected; nothing was sent to the host
    #[error(transparent)]
    Request(#[from] RequestError),
    /// Orchestration host call failed
    #[error(transparent)]
    Host(#[from] HostError),
    /// Dispatcher could not decide
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Settings fixed at startup
#[derive(Debug, Clone)]
pub struct VoiceRequestSettings {
    /// Accept requests without checking their signature
    pub skip_validation: bool,
    /// Orchestration started on launch
    pub orchestration_name: String,
}

/// Handler for platform requests
pub struct HandleVoiceRequestHandler {
    request_client: Arc<dyn RequestClient>,
    host: Arc<dyn OrchestrationHost>,
    dispatcher: IntentDispatcher,
    settings: VoiceRequestSettings,
}

impl HandleVoiceRequestHandler {
    pub fn new(
        request_client: Arc<dyn RequestClient>,
        host: Arc<dyn OrchestrationHost>,
        settings: VoiceRequestSettings,
    ) -> Self {
        Self {
            request_client,
            host,
            dispatcher: IntentDispatcher::new(),
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleVoiceRequestCommand,
    ) -> Result<HandleVoiceRequestResult, HandleVoiceRequestError> {
        // 1. Validate and parse
        let request = self
            .request_client
            .parse(
                cmd.signature.as_deref(),
                &cmd.body,
                self.settings.skip_validation,
            )
            .await?;

        tracing::info!(
            user_id = %request.user_id(),
            kind = request.kind().label(),
            "Handling voice request"
        );

        // 2. Fetch status when the dispatcher needs it
        let snapshot = match self.dispatcher.status_query(&request) {
            Some(instance_id) => Some(self.fetch_status(&instance_id).await?),
            None => None,
        };

        // 3. Decide
        let decision = self.dispatcher.decide(&request, snapshot.as_ref())?;

        // 4. Apply the effect
        self.apply(&decision.effect).await?;

        let (response, effect) = decision.into_parts();
        Ok(HandleVoiceRequestResult { response, effect })
    }

    async fn fetch_status(
        &self,
        instance_id: &InstanceId,
    ) -> Result<OrchestrationSnapshot, HostError> {
        let snapshot = self.host.get_status(instance_id).await?;
        tracing::debug!(
            instance_id = %instance_id,
            status = %snapshot.status(),
            "Fetched orchestration status"
        );
        Ok(snapshot)
    }

    async fn apply(&self, effect: &Effect) -> Result<(), HostError> {
        if let Some(instance_id) = effect.instance_id() {
            tracing::debug!(instance_id = %instance_id, effect = ?effect, "Applying effect");
        }

        match effect {
            Effect::StartInstance(instance_id) => {
                self.host
                    .start_new(&self.settings.orchestration_name, instance_id, None)
                    .await?;
                tracing::info!(
                    instance_id = %instance_id,
                    orchestration = %self.settings.orchestration_name,
                    "Started orchestration"
                );
            }
            // Status was read before deciding
            Effect::QueryInstance(_) => {}
            Effect::TerminateInstance(instance_id, reason) => {
                match self.host.terminate(instance_id, reason).await {
                    Ok(()) => {
                        tracing::info!(instance_id = %instance_id, reason = %reason, "Terminated orchestration");
                    }
                    Err(HostError::NotFound(_)) => {
                        tracing::debug!(instance_id = %instance_id, "No orchestration to terminate");
                    }
                    Err(e) => return Err(e),
                }
            }
            Effect::NoEffect => {}
        }
        Ok(())
    }
}

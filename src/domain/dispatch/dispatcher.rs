//! IntentDispatcher - request kind and orchestration status to response.

use crate::domain::foundation::InstanceId;
use crate::domain::orchestration::{Effect, OrchestrationSnapshot, OrchestrationStatus};
use crate::domain::voice::messages;
use crate::domain::voice::{IncomingRequest, Intent, OutgoingResponse, RequestKind};

use super::DispatchError;

/// Outcome of dispatching one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub response: OutgoingResponse,
    pub effect: Effect,
}

impl Decision {
    fn new(response: OutgoingResponse, effect: Effect) -> Self {
        Self { response, effect }
    }

    pub fn into_parts(self) -> (OutgoingResponse, Effect) {
        (self.response, self.effect)
    }
}

/// Stateless decision logic for the skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentDispatcher;

impl IntentDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Instance whose status must be passed to [`decide`](Self::decide).
    ///
    /// Only result queries need a status; every other request returns `None`.
    pub fn status_query(&self, request: &IncomingRequest) -> Option<InstanceId> {
        match request.kind() {
            RequestKind::Intent(Intent::GetResult) => Some(request.instance_id()),
            _ => None,
        }
    }

    /// Decides the response and the single effect for a request.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::StatusUnavailable` when the request asks for the
    /// task result and `status` is `None`.
    pub fn decide(
        &self,
        request: &IncomingRequest,
        status: Option<&OrchestrationSnapshot>,
    ) -> Result<Decision, DispatchError> {
        let decision = match request.kind() {
            RequestKind::Launch => Decision::new(
                OutgoingResponse::text(messages::TASK_STARTED).keep_session_open(),
                Effect::StartInstance(request.instance_id()),
            ),
            RequestKind::Intent(Intent::GetResult) => {
                let instance_id = request.instance_id();
                let snapshot =
                    status.ok_or_else(|| DispatchError::StatusUnavailable(instance_id.clone()))?;
                Decision::new(
                    Self::describe_status(snapshot),
                    Effect::QueryInstance(instance_id),
                )
            }
            RequestKind::Intent(Intent::Other(_)) => Decision::new(
                OutgoingResponse::text(messages::NOT_UNDERSTOOD),
                Effect::NoEffect,
            ),
            RequestKind::SessionEnded => Decision::new(
                OutgoingResponse::new(),
                Effect::TerminateInstance(
                    request.instance_id(),
                    messages::USER_CANCELED_REASON.to_string(),
                ),
            ),
            RequestKind::Unrecognized(_) => Decision::new(OutgoingResponse::new(), Effect::NoEffect),
        };

        Ok(decision)
    }

    fn describe_status(snapshot: &OrchestrationSnapshot) -> OutgoingResponse {
        match snapshot.status() {
            OrchestrationStatus::Canceled => OutgoingResponse::text(messages::TASK_CANCELED),
            OrchestrationStatus::Completed => {
                OutgoingResponse::text(messages::task_finished(snapshot.output().unwrap_or("")))
            }
            OrchestrationStatus::ContinuedAsNew => {
                OutgoingResponse::text(messages::TASK_RESTARTING).keep_session_open()
            }
            OrchestrationStatus::Failed | OrchestrationStatus::Terminated => {
                OutgoingResponse::text(messages::TASK_FAILED)
            }
            OrchestrationStatus::Pending | OrchestrationStatus::Running => {
                OutgoingResponse::text(messages::TASK_IN_PROGRESS).keep_session_open()
            }
        }
    }
}

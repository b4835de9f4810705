//! OrchestrationHost port - Interface to the host that runs background tasks.
//!
//! The host owns instance state and execution guarantees. Instances are keyed
//! by [`InstanceId`]; the skill never keeps its own copy of instance state.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::InstanceId;
use crate::domain::orchestration::OrchestrationSnapshot;

/// Errors reported by an orchestration host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Orchestration instance not found: {0}")]
    NotFound(InstanceId),

    #[error("Unknown orchestration: {0}")]
    UnknownOrchestration(String),

    #[error("Orchestration host unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected orchestration host response: {0}")]
    Protocol(String),
}

/// Port for starting, inspecting and terminating orchestration instances.
#[async_trait]
pub trait OrchestrationHost: Send + Sync {
    /// Start the orchestration `name` under `instance_id`.
    async fn start_new(
        &self,
        name: &str,
        instance_id: &InstanceId,
        input: Option<serde_json::Value>,
    ) -> Result<(), HostError>;

    /// Read the current status of an instance.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NotFound` when no instance exists for the id.
    async fn get_status(&self, instance_id: &InstanceId) -> Result<OrchestrationSnapshot, HostError>;

    /// Terminate a running instance, recording `reason`.
    ///
    /// Terminating a finished instance is not an error. A missing instance
    /// is reported as `HostError::NotFound` and left to the caller to judge.
    async fn terminate(&self, instance_id: &InstanceId, reason: &str) -> Result<(), HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_instance() {
        let err = HostError::NotFound(InstanceId::new("u1").unwrap());
        assert_eq!(format!("{}", err), "Orchestration instance not found: u1");
    }

    #[test]
    fn orchestration_host_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn OrchestrationHost>();
    }
}

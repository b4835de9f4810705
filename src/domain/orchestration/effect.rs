//! Side effect the dispatcher asks the caller to apply.

use crate::domain::foundation::InstanceId;

/// Exactly one effect is produced per incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the long-running orchestration keyed by the id.
    StartInstance(InstanceId),
    /// Read the status of the instance (already done before deciding).
    QueryInstance(InstanceId),
    /// Terminate the instance, recording the reason on the host.
    TerminateInstance(InstanceId, String),
    NoEffect,
}

impl Effect {
    /// Instance targeted by this effect, if any.
    pub fn instance_id(&self) -> Option<&InstanceId> {
        match self {
            Effect::StartInstance(id)
            | Effect::QueryInstance(id)
            | Effect::TerminateInstance(id, _) => Some(id),
            Effect::NoEffect => None,
        }
    }
}

//! Dispatch errors.

use thiserror::Error;

use crate::domain::foundation::InstanceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A status query was needed but the caller supplied no snapshot.
    #[error("Orchestration status unavailable for instance: {0}")]
    StatusUnavailable(InstanceId),
}

//! Runtime status of an orchestration instance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an orchestration instance as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationStatus {
    Pending,
    Running,
    ContinuedAsNew,
    Completed,
    Failed,
    Canceled,
    Terminated,
}

impl OrchestrationStatus {
    /// All statuses, in host declaration order.
    pub const ALL: [OrchestrationStatus; 7] = [
        OrchestrationStatus::Pending,
        OrchestrationStatus::Running,
        OrchestrationStatus::ContinuedAsNew,
        OrchestrationStatus::Completed,
        OrchestrationStatus::Failed,
        OrchestrationStatus::Canceled,
        OrchestrationStatus::Terminated,
    ];

    /// Returns true while the instance may still produce a result.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            OrchestrationStatus::Pending
                | OrchestrationStatus::Running
                | OrchestrationStatus::ContinuedAsNew
        )
    }

    /// Returns true once the instance can no longer change.
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

impl fmt::Display for OrchestrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrchestrationStatus::Pending => "Pending",
            OrchestrationStatus::Running => "Running",
            OrchestrationStatus::ContinuedAsNew => "ContinuedAsNew",
            OrchestrationStatus::Completed => "Completed",
            OrchestrationStatus::Failed => "Failed",
            OrchestrationStatus::Canceled => "Canceled",
            OrchestrationStatus::Terminated => "Terminated",
        };
        write!(f, "{}", s)
    }
}

/// Read-only view of an instance at one point in time.
///
/// `output` is only carried for completed instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationSnapshot {
    status: OrchestrationStatus,
    output: Option<String>,
}

impl OrchestrationSnapshot {
    /// Snapshot of an instance that has not completed.
    ///
    /// Passing `Completed` yields a completed snapshot without output.
    pub fn new(status: OrchestrationStatus) -> Self {
        Self {
            status,
            output: None,
        }
    }

    /// Snapshot of a completed instance and its output.
    pub fn completed(output: impl Into<String>) -> Self {
        Self {
            status: OrchestrationStatus::Completed,
            output: Some(output.into()),
        }
    }

    /// Builds a snapshot, dropping output for any status other than Completed.
    pub fn from_parts(status: OrchestrationStatus, output: Option<String>) -> Self {
        match status {
            OrchestrationStatus::Completed => Self { status, output },
            _ => Self::new(status),
        }
    }

    pub fn status(&self) -> OrchestrationStatus {
        self.status
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

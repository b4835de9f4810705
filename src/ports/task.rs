//! Task ports - Units of work executed by an orchestration host.
//!
//! An [`Orchestration`] is the workflow registered with the host under a
//! name; a [`TaskActivity`] is one step it calls. Hosts may replay either, so
//! implementations must be safe to run more than once.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by orchestrations and activities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Activity '{activity}' failed: {reason}")]
    ActivityFailed { activity: String, reason: String },
}

impl TaskError {
    pub fn activity_failed(activity: impl Into<String>, reason: impl Into<String>) -> Self {
        TaskError::ActivityFailed {
            activity: activity.into(),
            reason: reason.into(),
        }
    }
}

/// A single retryable unit of work.
#[async_trait]
pub trait TaskActivity: Send + Sync {
    /// Name the activity is registered under.
    fn name(&self) -> &str;

    /// Run the activity once and return its result.
    async fn run(&self, input: Option<serde_json::Value>) -> Result<String, TaskError>;
}

/// A named workflow the host can start.
#[async_trait]
pub trait Orchestration: Send + Sync {
    /// Name the orchestration is started by.
    fn name(&self) -> &str;

    /// Run the workflow to completion and return its output.
    async fn run(&self, input: Option<serde_json::Value>) -> Result<String, TaskError>;
}

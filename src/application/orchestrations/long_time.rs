//! LongTimeOrchestration - runs the long-running activity once.
//!
//! More activities could be chained here; the skill only needs one.

use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::{Orchestration, TaskActivity, TaskError};

/// Workflow whose output is the output of its single activity.
pub struct LongTimeOrchestration {
    name: String,
    activity: Arc<dyn TaskActivity>,
}

impl LongTimeOrchestration {
    pub fn new(name: impl Into<String>, activity: Arc<dyn TaskActivity>) -> Self {
        Self {
            name: name.into(),
            activity,
        }
    }
}

#[async_trait]
impl Orchestration for LongTimeOrchestration {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, input: Option<serde_json::Value>) -> Result<String, TaskError> {
        tracing::debug!(
            orchestration = %self.name,
            activity = self.activity.name(),
            "Calling activity"
        );
        self.activity.run(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingActivity {
        runs: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl TaskActivity for CountingActivity {
        fn name(&self) -> &str {
            "CountingActivity"
        }

        async fn run(&self, _input: Option<serde_json::Value>) -> Result<String, TaskError> {
            let n = self.runs.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                return Err(TaskError::activity_failed(self.name(), "boom"));
            }
            Ok(format!("run {}", n))
        }
    }

    #[tokio::test]
    async fn returns_activity_output() {
        let activity = Arc::new(CountingActivity {
            runs: AtomicUsize::new(0),
            fail: false,
        });
        let orchestration = LongTimeOrchestration::new("LongTimeOrchestration", activity.clone());

        let output = orchestration.run(None).await.unwrap();

        assert_eq!(output, "run 1");
        assert_eq!(activity.runs.load(Ordering::SeqCst), 1);
        assert_eq!(orchestration.name(), "LongTimeOrchestration");
    }

    #[tokio::test]
    async fn propagates_activity_failure() {
        let activity = Arc::new(CountingActivity {
            runs: AtomicUsize::new(0),
            fail: true,
        });
        let orchestration = LongTimeOrchestration::new("LongTimeOrchestration", activity);

        let result = orchestration.run(None).await;

        assert!(matches!(result, Err(TaskError::ActivityFailed { .. })));
    }
}

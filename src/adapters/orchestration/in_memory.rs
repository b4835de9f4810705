//! In-Memory Orchestration Host Adapter
//!
//! Runs each instance as a spawned tokio task and keeps instance state in
//! memory. Nothing survives a restart and nothing is replayed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::AbortHandle;

use crate::domain::foundation::InstanceId;
use crate::domain::orchestration::{OrchestrationSnapshot, OrchestrationStatus};
use crate::ports::{HostError, Orchestration, OrchestrationHost};

#[derive(Debug)]
struct InstanceRecord {
    status: OrchestrationStatus,
    output: Option<String>,
    reason: Option<String>,
    generation: u64,
    task: Option<AbortHandle>,
}

type InstanceTable = Arc<RwLock<HashMap<InstanceId, InstanceRecord>>>;

/// In-process orchestration host.
///
/// Starting an id that is still in flight aborts the old run and replaces it.
/// Records are never evicted: a finished instance stays in the table until
/// the same id is started again, so memory grows with the number of distinct
/// users. Meant for development and tests, not long-lived deployments.
#[derive(Clone)]
pub struct InMemoryOrchestrationHost {
    orchestrations: HashMap<String, Arc<dyn Orchestration>>,
    instances: InstanceTable,
    generations: Arc<AtomicU64>,
}

impl InMemoryOrchestrationHost {
    /// Create a host with no registered orchestrations
    pub fn new() -> Self {
        Self {
            orchestrations: HashMap::new(),
            instances: Arc::new(RwLock::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register an orchestration under its own name
    pub fn with_orchestration(mut self, orchestration: Arc<dyn Orchestration>) -> Self {
        self.orchestrations
            .insert(orchestration.name().to_string(), orchestration);
        self
    }

    /// Get the number of known instances
    pub async fn instance_count(&self) -> usize {
        self.instances.read().await.len()
    }

    /// Termination reason recorded for an instance, if any
    pub async fn termination_reason(&self, instance_id: &InstanceId) -> Option<String> {
        self.instances
            .read()
            .await
            .get(instance_id)
            .and_then(|r| r.reason.clone())
    }

    /// Moves an in-progress run of `generation` to `status`.
    ///
    /// Updates from a replaced or terminated run are dropped.
    async fn record(
        instances: &InstanceTable,
        instance_id: &InstanceId,
        generation: u64,
        status: OrchestrationStatus,
        output: Option<String>,
    ) {
        let mut instances = instances.write().await;
        if let Some(record) = instances.get_mut(instance_id) {
            if record.generation == generation && record.status.is_in_progress() {
                record.status = status;
                record.output = output;
                if status.is_terminal() {
                    record.task = None;
                }
            }
        }
    }
}

impl Default for InMemoryOrchestrationHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrchestrationHost for InMemoryOrchestrationHost {
    async fn start_new(
        &self,
        name: &str,
        instance_id: &InstanceId,
        input: Option<serde_json::Value>,
    ) -> Result<(), HostError> {
        let orchestration = self
            .orchestrations
            .get(name)
            .cloned()
            .ok_or_else(|| HostError::UnknownOrchestration(name.to_string()))?;

        let generation = self.generations.fetch_add(1, Ordering::SeqCst);

        // Held across spawn so the task cannot record before its record exists
        let mut instances = self.instances.write().await;

        if let Some(previous) = instances.get(instance_id) {
            if let Some(task) = &previous.task {
                tracing::info!(instance_id = %instance_id, "Replacing in-flight orchestration");
                task.abort();
            }
        }

        let table = self.instances.clone();
        let id = instance_id.clone();
        let worker = tokio::spawn(async move {
            Self::record(&table, &id, generation, OrchestrationStatus::Running, None).await;
            orchestration.run(input).await
        });
        let abort = worker.abort_handle();

        // Outcome is recorded outside the worker so a panicking run still ends as Failed
        let table = self.instances.clone();
        let id = instance_id.clone();
        tokio::spawn(async move {
            match worker.await {
                Ok(Ok(output)) => {
                    tracing::debug!(instance_id = %id, "Orchestration completed");
                    Self::record(&table, &id, generation, OrchestrationStatus::Completed, Some(output))
                        .await;
                }
                Ok(Err(e)) => {
                    tracing::warn!(instance_id = %id, error = %e, "Orchestration failed");
                    Self::record(&table, &id, generation, OrchestrationStatus::Failed, None).await;
                }
                Err(e) if e.is_panic() => {
                    tracing::error!(instance_id = %id, "Orchestration panicked");
                    Self::record(&table, &id, generation, OrchestrationStatus::Failed, None).await;
                }
                // Aborted by terminate or a newer start, which already updated the record
                Err(_) => {}
            }
        });

        instances.insert(
            instance_id.clone(),
            InstanceRecord {
                status: OrchestrationStatus::Pending,
                output: None,
                reason: None,
                generation,
                task: Some(abort),
            },
        );

        Ok(())
    }

    async fn get_status(&self, instance_id: &InstanceId) -> Result<OrchestrationSnapshot, HostError> {
        let instances = self.instances.read().await;
        instances
            .get(instance_id)
            .map(|r| OrchestrationSnapshot::from_parts(r.status, r.output.clone()))
            .ok_or_else(|| HostError::NotFound(instance_id.clone()))
    }

    async fn terminate(&self, instance_id: &InstanceId, reason: &str) -> Result<(), HostError> {
        let mut instances = self.instances.write().await;
        let record = instances
            .get_mut(instance_id)
            .ok_or_else(|| HostError::NotFound(instance_id.clone()))?;

        if record.status.is_terminal() {
            return Ok(());
        }

        if let Some(task) = record.task.take() {
            task.abort();
        }
        record.status = OrchestrationStatus::Terminated;
        record.output = None;
        record.reason = Some(reason.to_string());

        Ok(())
    }
}

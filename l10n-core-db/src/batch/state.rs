use std::collections::HashMap;

use async_trait::async_trait;
use l10n_core_api::batch::ExecutionState;
use tokio::sync::RwLock;

/// Source of the live per-chunk execution state of a batch job.
///
/// Production implementations live in the job engine (backed by its shared
/// state store). The finalizer only ever reads; the returned map reflects
/// externally-visible committed state, independent of the caller's own
/// uncommitted transaction, so polling it cannot deadlock a sibling commit.
#[async_trait]
pub trait BatchJobStateProvider: Send + Sync {
    /// Chunk-execution id to execution state, for every chunk of `job_id`
    async fn get_state(&self, job_id: i64) -> HashMap<i64, ExecutionState>;
}

/// In-memory state provider for tests and single-process embeddings.
#[derive(Debug, Default)]
pub struct InMemoryBatchJobStateProvider {
    states: RwLock<HashMap<i64, HashMap<i64, ExecutionState>>>,
}

impl InMemoryBatchJobStateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of one chunk, replacing any previous entry
    pub async fn set_chunk_state(&self, job_id: i64, chunk_execution_id: i64, state: ExecutionState) {
        self.states
            .write()
            .await
            .entry(job_id)
            .or_default()
            .insert(chunk_execution_id, state);
    }
}

#[async_trait]
impl BatchJobStateProvider for InMemoryBatchJobStateProvider {
    async fn get_state(&self, job_id: i64) -> HashMap<i64, ExecutionState> {
        self.states
            .read()
            .await
            .get(&job_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use l10n_core_api::batch::BatchJobChunkExecutionStatus;

    #[tokio::test]
    async fn unknown_job_has_no_chunk_states() {
        let provider = InMemoryBatchJobStateProvider::new();
        assert!(provider.get_state(42).await.is_empty());
    }

    #[tokio::test]
    async fn chunk_state_is_replaced_on_update() {
        let provider = InMemoryBatchJobStateProvider::new();
        let running = ExecutionState {
            retry: false,
            transaction_committed: false,
            status: BatchJobChunkExecutionStatus::Running,
        };
        let committed = ExecutionState {
            transaction_committed: true,
            status: BatchJobChunkExecutionStatus::Success,
            ..running
        };

        provider.set_chunk_state(1, 100, running).await;
        provider.set_chunk_state(1, 100, committed).await;

        let states = provider.get_state(1).await;
        assert_eq!(states.len(), 1);
        assert!(states[&100].is_durably_completed());
    }
}

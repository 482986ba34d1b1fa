use std::sync::Arc;
use std::time::Duration;

use l10n_core_api::batch::BatchJobDto;
use l10n_core_api::error::{FinalizeError, FinalizeResult};
use sqlx::Database;
use tokio::sync::{mpsc, Mutex};
use tokio::time::Instant;

use crate::batch::events::{BatchJobCompletionEvent, BatchJobOutcome};
use crate::batch::holder::{ActivityHolder, AfterFlushFuture};
use crate::batch::state::BatchJobStateProvider;
use crate::repository::ActivityMergeOps;

/// Bounds for the sibling-chunk coordination wait.
#[derive(Debug, Clone, Copy)]
pub struct ChunkWaitConfig {
    /// Absolute bound on the wait; exceeding it fails the finalization
    pub timeout: Duration,
    /// Delay between state-provider polls
    pub poll_interval: Duration,
}

impl Default for ChunkWaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Merges the activity revisions written by a batch job's chunk executions
/// into a single revision owned by the job.
///
/// Each chunk execution writes its own revision inside its own transaction.
/// When the job's terminal event fires, the worker handling it registers an
/// after-flush callback on its unit of work; the callback waits for every
/// sibling chunk's commit to become visible, then folds all sibling
/// revisions into the lowest-id one with set-based storage operations. The
/// merge is the last work before that transaction commits, so either the
/// whole merge lands or a rollback undoes it together with the event
/// handling itself.
pub struct BatchJobActivityFinalizer<DB: Database> {
    repository: Arc<dyn ActivityMergeOps<DB>>,
    state_provider: Arc<dyn BatchJobStateProvider>,
    activity_holder: Arc<Mutex<ActivityHolder>>,
    wait_config: ChunkWaitConfig,
}

impl<DB: Database> Clone for BatchJobActivityFinalizer<DB> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            state_provider: Arc::clone(&self.state_provider),
            activity_holder: Arc::clone(&self.activity_holder),
            wait_config: self.wait_config,
        }
    }
}

impl<DB: Database> BatchJobActivityFinalizer<DB> {
    pub fn new(
        repository: Arc<dyn ActivityMergeOps<DB>>,
        state_provider: Arc<dyn BatchJobStateProvider>,
        activity_holder: Arc<Mutex<ActivityHolder>>,
        wait_config: ChunkWaitConfig,
    ) -> Self {
        Self {
            repository,
            state_provider,
            activity_holder,
            wait_config,
        }
    }

    pub async fn finalize_when_job_succeeded(&self, job: &BatchJobDto) -> FinalizeResult<()> {
        self.finalize_when_job_completed(job).await
    }

    pub async fn finalize_when_job_failed(&self, job: &BatchJobDto) -> FinalizeResult<()> {
        self.finalize_when_job_completed(job).await
    }

    pub async fn finalize_when_job_cancelled(&self, job: &BatchJobDto) -> FinalizeResult<()> {
        self.finalize_when_job_completed(job).await
    }

    /// Consume completion events from the job engine until the channel
    /// closes, routing every terminal outcome into finalization.
    pub async fn listen(&self, mut events: mpsc::Receiver<BatchJobCompletionEvent>) {
        while let Some(event) = events.recv().await {
            let result = match event.outcome {
                BatchJobOutcome::Succeeded => self.finalize_when_job_succeeded(&event.job).await,
                BatchJobOutcome::Failed => self.finalize_when_job_failed(&event.job).await,
                BatchJobOutcome::Cancelled => self.finalize_when_job_cancelled(&event.job).await,
            };
            if let Err(error) = result {
                tracing::error!(job_id = event.job.id, %error, "batch job activity finalization failed");
            }
        }
    }

    /// Register the merge as an after-flush callback on the current unit of
    /// work.
    ///
    /// The worker processing the terminal event must already hold the
    /// revision its own chunk wrote; a missing revision is a programming
    /// error, not a condition to recover from. The merge itself must not
    /// run before the current unit of work's writes are staged, because it
    /// reads rows those writes produce.
    async fn finalize_when_job_completed(&self, job: &BatchJobDto) -> FinalizeResult<()> {
        let mut holder = self.activity_holder.lock().await;
        if holder.activity_revision.is_none() {
            return Err(FinalizeError::MissingActivityRevision);
        }

        let repository = Arc::clone(&self.repository);
        let state_provider = Arc::clone(&self.state_provider);
        let wait_config = self.wait_config;
        let job = job.clone();

        holder.register_after_flush(Box::new(move || -> AfterFlushFuture {
            Box::pin(async move {
                wait_for_other_chunks_to_complete(state_provider.as_ref(), &job, &wait_config)
                    .await?;

                let mut revision_ids = repository.find_revision_ids_by_batch_job(job.id).await?;
                if revision_ids.is_empty() {
                    return Ok(());
                }
                let target_revision_id = revision_ids.remove(0);

                repository
                    .merge_describing_entities(target_revision_id, &revision_ids)
                    .await?;
                repository
                    .merge_modified_entities(target_revision_id, &revision_ids)
                    .await?;
                repository.delete_batch(&revision_ids).await?;
                repository
                    .assign_revision_to_batch_job(target_revision_id, job.id)
                    .await?;

                tracing::info!(
                    job_id = job.id,
                    target_revision_id,
                    merged_revisions = revision_ids.len(),
                    "merged batch job activity revisions"
                );
                Ok(())
            })
        }));
        Ok(())
    }
}

/// Block until every chunk except the one running this finalization is
/// durably committed.
///
/// The completion event fires on whichever worker finishes last, while
/// sibling commits may still be landing; merging before they land would
/// miss their revisions. Reads only externally-visible state, so it holds
/// nothing a sibling commit could wait on.
async fn wait_for_other_chunks_to_complete(
    state_provider: &dyn BatchJobStateProvider,
    job: &BatchJobDto,
    config: &ChunkWaitConfig,
) -> FinalizeResult<()> {
    let expected = job.total_chunks.saturating_sub(1);
    let deadline = Instant::now() + config.timeout;
    loop {
        let committed = state_provider
            .get_state(job.id)
            .await
            .values()
            .filter(|state| state.is_durably_completed())
            .count();
        if committed == expected {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(FinalizeError::ChunkWaitTimeout {
                job_id: job.id,
                committed,
                expected,
                waited: config.timeout,
            });
        }
        tracing::debug!(
            job_id = job.id,
            committed,
            expected,
            "waiting for sibling chunks to commit"
        );
        tokio::time::sleep(config.poll_interval).await;
    }
}

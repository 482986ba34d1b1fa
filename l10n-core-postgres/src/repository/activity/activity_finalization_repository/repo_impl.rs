use async_trait::async_trait;

use crate::unit_of_work::{Executor, TransactionAware, TransactionResult};

/// Storage collaborator of the batch-job activity finalizer.
///
/// Every operation is a set-based statement scoped by revision-id lists;
/// revision and entity counts are unbounded, so rows are never pulled into
/// memory. All statements run on the shared transaction of the triggering
/// worker's unit of work.
pub struct ActivityFinalizationRepositoryImpl {
    pub executor: Executor,
}

impl ActivityFinalizationRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl TransactionAware for ActivityFinalizationRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use l10n_core_api::batch::{
        BatchJobChunkExecutionStatus, BatchJobDto, BatchJobType, ExecutionState,
    };
    use l10n_core_db::batch::{
        BatchJobActivityFinalizer, BatchJobStateProvider, ChunkWaitConfig,
        InMemoryBatchJobStateProvider,
    };
    use l10n_core_db::repository::{ActivityMergeOps, CreateBatch, FindByRevisionIds, LoadBatch};
    use serial_test::serial;
    use sqlx::Postgres;

    use crate::repository::activity::test_utils::{
        create_test_batch_job, create_test_chunk_execution, create_test_describing_entity,
        create_test_modified_entity, create_test_revision,
    };
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    #[serial]
    async fn finalizes_job_activity_end_to_end(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let executor = ctx.unit_of_work.executor();

        let job_id = create_test_batch_job(&executor, 3).await?;
        let mut chunk_ids = Vec::new();
        for _ in 0..3 {
            chunk_ids.push(create_test_chunk_execution(&executor, job_id).await?);
        }

        let revisions = vec![
            create_test_revision(9010, chunk_ids[0]),
            create_test_revision(9011, chunk_ids[1]),
            create_test_revision(9012, chunk_ids[2]),
        ];
        ctx.repos.revision_repository.create_batch(revisions).await?;
        ctx.repos
            .describing_entity_repository
            .create_batch(vec![
                create_test_describing_entity(9010, "Key", 5),
                create_test_describing_entity(9011, "Key", 5),
                create_test_describing_entity(9011, "Key", 7),
            ])
            .await?;
        ctx.repos
            .modified_entity_repository
            .create_batch(vec![
                create_test_modified_entity(9010, 100),
                create_test_modified_entity(9011, 101),
                create_test_modified_entity(9012, 102),
            ])
            .await?;

        let state_provider = Arc::new(InMemoryBatchJobStateProvider::new());
        for chunk_id in &chunk_ids[0..2] {
            state_provider
                .set_chunk_state(
                    job_id,
                    *chunk_id,
                    ExecutionState {
                        retry: false,
                        transaction_committed: true,
                        status: BatchJobChunkExecutionStatus::Success,
                    },
                )
                .await;
        }

        let holder = ctx.unit_of_work.activity_holder();
        holder.lock().await.activity_revision = Some(create_test_revision(9012, chunk_ids[2]));

        let finalizer = BatchJobActivityFinalizer::new(
            Arc::clone(&ctx.repos.finalization_repository) as Arc<dyn ActivityMergeOps<Postgres>>,
            state_provider as Arc<dyn BatchJobStateProvider>,
            Arc::clone(&holder),
            ChunkWaitConfig {
                timeout: Duration::from_secs(2),
                poll_interval: Duration::from_millis(10),
            },
        );

        let job = BatchJobDto {
            id: job_id,
            project_id: 1,
            job_type: BatchJobType::MachineTranslate,
            total_chunks: 3,
        };
        finalizer.finalize_when_job_succeeded(&job).await?;
        holder.lock().await.run_after_flush().await?;

        let loaded = ctx
            .repos
            .revision_repository
            .load_batch(&[9010, 9011, 9012])
            .await?;
        let survivor = loaded[0].as_ref().expect("target revision must survive");
        assert_eq!(survivor.batch_job_id, Some(job_id));
        assert_eq!(survivor.batch_job_chunk_execution_id, None);
        assert!(loaded[1].is_none());
        assert!(loaded[2].is_none());

        let described = ctx
            .repos
            .describing_entity_repository
            .find_by_revision_ids(&[9010, 9011, 9012])
            .await?;
        let pairs: Vec<(String, i64, i64)> = described
            .iter()
            .map(|row| {
                (
                    row.entity_class.to_string(),
                    row.entity_id,
                    row.data["origin"].as_i64().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![("Key".to_string(), 5, 9010), ("Key".to_string(), 7, 9011)]
        );

        let modified = ctx
            .repos
            .modified_entity_repository
            .find_by_revision_ids(&[9010, 9011, 9012])
            .await?;
        assert_eq!(modified.len(), 3);
        assert!(modified.iter().all(|row| row.activity_revision_id == 9010));

        Ok(())
    }
}

use async_trait::async_trait;
use l10n_core_db::repository::assign_revision_to_batch_job::AssignRevisionToBatchJob;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityFinalizationRepositoryImpl;

impl ActivityFinalizationRepositoryImpl {
    pub(super) async fn assign_revision_to_batch_job_impl(
        repo: &ActivityFinalizationRepositoryImpl,
        revision_id: i64,
        batch_job_id: i64,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        sqlx::query(
            r#"
            UPDATE activity_revision
            SET batch_job_chunk_execution_id = NULL, batch_job_id = $2
            WHERE id = $1
            "#,
        )
        .bind(revision_id)
        .bind(batch_job_id)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AssignRevisionToBatchJob<Postgres> for ActivityFinalizationRepositoryImpl {
    async fn assign_revision_to_batch_job(
        &self,
        revision_id: i64,
        batch_job_id: i64,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::assign_revision_to_batch_job_impl(self, revision_id, batch_job_id).await
    }
}

#[cfg(test)]
mod tests {
    use l10n_core_db::repository::assign_revision_to_batch_job::AssignRevisionToBatchJob;
    use l10n_core_db::repository::create_batch::CreateBatch;
    use l10n_core_db::repository::load_batch::LoadBatch;
    use serial_test::serial;

    use crate::repository::activity::test_utils::{
        create_test_batch_job, create_test_chunk_execution, create_test_revision,
    };
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    #[serial]
    async fn transfers_ownership_from_chunk_to_job(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let executor = ctx.unit_of_work.executor();

        let job_id = create_test_batch_job(&executor, 1).await?;
        let chunk_id = create_test_chunk_execution(&executor, job_id).await?;
        ctx.repos
            .revision_repository
            .create_batch(vec![create_test_revision(9301, chunk_id)])
            .await?;

        ctx.repos
            .finalization_repository
            .assign_revision_to_batch_job(9301, job_id)
            .await?;

        let loaded = ctx.repos.revision_repository.load_batch(&[9301]).await?;
        let revision = loaded[0].as_ref().expect("revision must exist");
        assert_eq!(revision.batch_job_id, Some(job_id));
        assert_eq!(revision.batch_job_chunk_execution_id, None);

        Ok(())
    }
}

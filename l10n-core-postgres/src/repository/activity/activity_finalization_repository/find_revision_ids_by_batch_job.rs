use async_trait::async_trait;
use l10n_core_db::repository::find_revision_ids_by_batch_job::FindRevisionIdsByBatchJob;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityFinalizationRepositoryImpl;

impl ActivityFinalizationRepositoryImpl {
    pub(super) async fn find_revision_ids_by_batch_job_impl(
        repo: &ActivityFinalizationRepositoryImpl,
        batch_job_id: i64,
    ) -> Result<Vec<i64>, Box<dyn Error + Send + Sync>> {
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT ar.id
            FROM activity_revision ar
            JOIN batch_job_chunk_execution bjce ON bjce.id = ar.batch_job_chunk_execution_id
            WHERE bjce.batch_job_id = $1
            ORDER BY ar.id
            "#,
        )
        .bind(batch_job_id)
        .fetch_all(&mut **transaction)
        .await?;

        Ok(ids)
    }
}

#[async_trait]
impl FindRevisionIdsByBatchJob<Postgres> for ActivityFinalizationRepositoryImpl {
    async fn find_revision_ids_by_batch_job(
        &self,
        batch_job_id: i64,
    ) -> Result<Vec<i64>, Box<dyn Error + Send + Sync>> {
        Self::find_revision_ids_by_batch_job_impl(self, batch_job_id).await
    }
}

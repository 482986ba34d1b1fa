use async_trait::async_trait;
use l10n_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityFinalizationRepositoryImpl;

impl ActivityFinalizationRepositoryImpl {
    /// Runs after sibling rows have been reassigned, so the deleted
    /// revisions have no dependents left.
    pub(super) async fn delete_revisions_impl(
        repo: &ActivityFinalizationRepositoryImpl,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let result = sqlx::query(
            r#"
            DELETE FROM activity_revision WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .execute(&mut **transaction)
        .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for ActivityFinalizationRepositoryImpl {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_revisions_impl(self, ids).await
    }
}

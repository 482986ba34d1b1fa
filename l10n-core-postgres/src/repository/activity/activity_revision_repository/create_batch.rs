use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityRevisionModel;
use l10n_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityRevisionRepositoryImpl;

impl ActivityRevisionRepositoryImpl {
    // Revisions arrive with caller-assigned ids; chunk workers draw them
    // from the shared sequence before linking child rows.
    pub(super) async fn create_batch_impl(
        repo: &ActivityRevisionRepositoryImpl,
        items: Vec<ActivityRevisionModel>,
    ) -> Result<Vec<ActivityRevisionModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for entity in &items {
            sqlx::query(
                r#"
                INSERT INTO activity_revision
                (id, timestamp, author_id, activity_type, project_id,
                 batch_job_chunk_execution_id, batch_job_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(entity.id)
            .bind(entity.timestamp)
            .bind(entity.author_id)
            .bind(entity.activity_type.as_deref())
            .bind(entity.project_id)
            .bind(entity.batch_job_chunk_execution_id)
            .bind(entity.batch_job_id)
            .execute(&mut **transaction)
            .await?;
        }

        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, ActivityRevisionModel> for ActivityRevisionRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<ActivityRevisionModel>,
    ) -> Result<Vec<ActivityRevisionModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

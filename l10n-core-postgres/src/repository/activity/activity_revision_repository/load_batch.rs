use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityRevisionModel;
use l10n_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;

use super::repo_impl::ActivityRevisionRepositoryImpl;
use crate::utils::TryFromRow;

impl ActivityRevisionRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ActivityRevisionRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<ActivityRevisionModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let rows = sqlx::query(
            r#"
            SELECT id, timestamp, author_id, activity_type, project_id,
                   batch_job_chunk_execution_id, batch_job_id
            FROM activity_revision
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&mut **transaction)
        .await?;

        let mut by_id = HashMap::with_capacity(rows.len());
        for row in &rows {
            let model = ActivityRevisionModel::try_from_row(row)?;
            by_id.insert(model.id, model);
        }

        Ok(ids.iter().map(|id| by_id.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, ActivityRevisionModel> for ActivityRevisionRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<ActivityRevisionModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

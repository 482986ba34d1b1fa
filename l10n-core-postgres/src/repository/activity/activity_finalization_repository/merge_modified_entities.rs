use async_trait::async_trait;
use l10n_core_db::repository::merge_modified_entities::MergeModifiedEntities;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityFinalizationRepositoryImpl;

impl ActivityFinalizationRepositoryImpl {
    pub(super) async fn merge_modified_entities_impl(
        repo: &ActivityFinalizationRepositoryImpl,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if source_revision_ids.is_empty() {
            return Ok(());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        sqlx::query(
            r#"
            UPDATE activity_modified_entity
            SET activity_revision_id = $1
            WHERE activity_revision_id = ANY($2)
            "#,
        )
        .bind(target_revision_id)
        .bind(source_revision_ids)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl MergeModifiedEntities<Postgres> for ActivityFinalizationRepositoryImpl {
    async fn merge_modified_entities(
        &self,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::merge_modified_entities_impl(self, target_revision_id, source_revision_ids).await
    }
}

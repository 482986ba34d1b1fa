use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityDescribingEntityModel;
use l10n_core_db::repository::find_by_revision_ids::FindByRevisionIds;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DescribingEntityRepositoryImpl;
use crate::utils::TryFromRow;

impl DescribingEntityRepositoryImpl {
    pub(super) async fn find_by_revision_ids_impl(
        repo: &DescribingEntityRepositoryImpl,
        revision_ids: &[i64],
    ) -> Result<Vec<ActivityDescribingEntityModel>, Box<dyn Error + Send + Sync>> {
        if revision_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let rows = sqlx::query(
            r#"
            SELECT activity_revision_id, entity_class, entity_id, data
            FROM activity_describing_entity
            WHERE activity_revision_id = ANY($1)
            ORDER BY activity_revision_id, entity_class, entity_id
            "#,
        )
        .bind(revision_ids)
        .fetch_all(&mut **transaction)
        .await?;

        rows.iter()
            .map(ActivityDescribingEntityModel::try_from_row)
            .collect()
    }
}

#[async_trait]
impl FindByRevisionIds<Postgres, ActivityDescribingEntityModel> for DescribingEntityRepositoryImpl {
    async fn find_by_revision_ids(
        &self,
        revision_ids: &[i64],
    ) -> Result<Vec<ActivityDescribingEntityModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_revision_ids_impl(self, revision_ids).await
    }
}

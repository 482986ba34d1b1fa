use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityDescribingEntityModel;
use l10n_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DescribingEntityRepositoryImpl;

impl DescribingEntityRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &DescribingEntityRepositoryImpl,
        items: Vec<ActivityDescribingEntityModel>,
    ) -> Result<Vec<ActivityDescribingEntityModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for entity in &items {
            sqlx::query(
                r#"
                INSERT INTO activity_describing_entity
                (activity_revision_id, entity_class, entity_id, data)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(entity.activity_revision_id)
            .bind(entity.entity_class.as_str())
            .bind(entity.entity_id)
            .bind(&entity.data)
            .execute(&mut **transaction)
            .await?;
        }

        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, ActivityDescribingEntityModel> for DescribingEntityRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<ActivityDescribingEntityModel>,
    ) -> Result<Vec<ActivityDescribingEntityModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

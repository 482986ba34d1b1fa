use async_trait::async_trait;
use l10n_core_db::repository::merge_describing_entities::MergeDescribingEntities;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityFinalizationRepositoryImpl;

impl ActivityFinalizationRepositoryImpl {
    /// Dedup must run before reassignment: reassigning first would collide
    /// duplicate (entity_class, entity_id) pairs on the composite primary
    /// key and destroy the revision-id grouping the dedup keys on.
    pub(super) async fn merge_describing_entities_impl(
        repo: &ActivityFinalizationRepositoryImpl,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if source_revision_ids.is_empty() {
            return Ok(());
        }

        let mut scope_revision_ids = Vec::with_capacity(source_revision_ids.len() + 1);
        scope_revision_ids.push(target_revision_id);
        scope_revision_ids.extend_from_slice(source_revision_ids);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        // keep only the lowest-revision occurrence of each pair
        sqlx::query(
            r#"
            DELETE FROM activity_describing_entity
            WHERE activity_revision_id = ANY($1)
              AND (entity_class, entity_id, activity_revision_id) NOT IN (
                  SELECT entity_class, entity_id, MIN(activity_revision_id)
                  FROM activity_describing_entity
                  WHERE activity_revision_id = ANY($1)
                  GROUP BY entity_class, entity_id)
            "#,
        )
        .bind(&scope_revision_ids[..])
        .execute(&mut **transaction)
        .await?;

        sqlx::query(
            r#"
            UPDATE activity_describing_entity
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
impl MergeDescribingEntities<Postgres> for ActivityFinalizationRepositoryImpl {
    async fn merge_describing_entities(
        &self,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::merge_describing_entities_impl(self, target_revision_id, source_revision_ids).await
    }
}

#[cfg(test)]
mod tests {
    use l10n_core_db::repository::create_batch::CreateBatch;
    use l10n_core_db::repository::find_by_revision_ids::FindByRevisionIds;
    use l10n_core_db::repository::merge_describing_entities::MergeDescribingEntities;
    use serial_test::serial;

    use crate::repository::activity::test_utils::{
        create_test_batch_job, create_test_chunk_execution, create_test_describing_entity,
        create_test_revision,
    };
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    #[serial]
    async fn deduplicates_then_reassigns_to_the_target(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let executor = ctx.unit_of_work.executor();

        let job_id = create_test_batch_job(&executor, 3).await?;
        let mut revisions = Vec::new();
        for id in [9201, 9202, 9203] {
            let chunk = create_test_chunk_execution(&executor, job_id).await?;
            revisions.push(create_test_revision(id, chunk));
        }
        ctx.repos.revision_repository.create_batch(revisions).await?;
        ctx.repos
            .describing_entity_repository
            .create_batch(vec![
                create_test_describing_entity(9201, "Key", 5),
                create_test_describing_entity(9202, "Key", 5),
                create_test_describing_entity(9203, "Key", 5),
                create_test_describing_entity(9202, "Key", 9),
                create_test_describing_entity(9203, "Language", 2),
            ])
            .await?;

        ctx.repos
            .finalization_repository
            .merge_describing_entities(9201, &[9202, 9203])
            .await?;

        let rows = ctx
            .repos
            .describing_entity_repository
            .find_by_revision_ids(&[9201, 9202, 9203])
            .await?;
        let mut pairs: Vec<(i64, String, i64, i64)> = rows
            .iter()
            .map(|row| {
                (
                    row.activity_revision_id,
                    row.entity_class.to_string(),
                    row.entity_id,
                    row.data["origin"].as_i64().unwrap(),
                )
            })
            .collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                (9201, "Key".to_string(), 5, 9201),
                (9201, "Key".to_string(), 9, 9202),
                (9201, "Language".to_string(), 2, 9203),
            ]
        );

        Ok(())
    }
}

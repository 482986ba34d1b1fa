use async_trait::async_trait;
use sqlx::Database;

/// Repository trait reassigning modified-entity rows of sibling revisions
/// to a target revision
///
/// Modified-entity rows have no natural dedup key; every row is preserved,
/// only its owning revision id changes. A single set-based update scoped by
/// the id list, never a row-by-row load.
#[async_trait]
pub trait MergeModifiedEntities<DB: Database>: Send + Sync {
    /// Reassign all modified-entity rows of `source_revision_ids` to the
    /// target revision
    async fn merge_modified_entities(
        &self,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

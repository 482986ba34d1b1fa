use async_trait::async_trait;
use sqlx::Database;

/// Repository trait merging describing-entity rows of sibling revisions
/// into a target revision
///
/// Two set-based steps, in this order:
/// 1. For every (entity_class, entity_id) pair occurring more than once
///    across {target} ∪ `source_revision_ids`, delete all occurrences
///    except the one with the lowest revision id.
/// 2. Reassign the remaining rows of `source_revision_ids` to the target.
///
/// Dedup must precede reassignment: reassignment first would collapse the
/// revision-id grouping the dedup keys on and collide on the composite
/// primary key.
#[async_trait]
pub trait MergeDescribingEntities<DB: Database>: Send + Sync {
    /// Deduplicate and reassign describing-entity rows
    ///
    /// # Arguments
    /// * `target_revision_id` - The surviving revision
    /// * `source_revision_ids` - Sibling revisions to fold in (target excluded)
    async fn merge_describing_entities(
        &self,
        target_revision_id: i64,
        source_revision_ids: &[i64],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for loading the rows attached to a set of
/// activity revisions
///
/// Used by display/verification reads over describing- and modified-entity
/// rows. Results are ordered by owning revision id.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The row type attached to revisions
#[async_trait]
pub trait FindByRevisionIds<DB: Database, T>: Send + Sync {
    /// Load all rows whose owning revision is in `revision_ids`
    async fn find_by_revision_ids(
        &self,
        revision_ids: &[i64],
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}

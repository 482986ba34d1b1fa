use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting multiple rows in a batch
///
/// All deletes are performed within the caller's transaction.
/// Returns the number of rows deleted.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple rows by their ids within the current transaction
    ///
    /// # Arguments
    /// * `ids` - A slice of ids of the rows to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of rows deleted
    /// * `Err` - An error if the statement could not be executed
    async fn delete_batch(
        &self,
        ids: &[i64],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}

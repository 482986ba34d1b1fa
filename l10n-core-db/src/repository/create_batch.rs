use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for inserting multiple rows in a batch
///
/// This trait provides a standard interface for batch inserting rows into a
/// data store. All inserts are performed within the caller's transaction.
/// Rows carry their identifiers; the store inserts them as given.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The row type to insert
#[async_trait]
pub trait CreateBatch<DB: Database, T>: Send + Sync {
    /// Insert multiple rows within the current transaction
    ///
    /// # Arguments
    /// * `items` - A vector of rows to insert
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The inserted rows
    /// * `Err` - An error if the statements could not be executed
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}

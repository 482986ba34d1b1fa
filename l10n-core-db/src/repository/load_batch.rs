use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading multiple entities by their IDs
///
/// Returns items in the same order as the provided IDs.
/// Missing items are represented as None in the result.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait LoadBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Load multiple entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of ids of the entities to load
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - A vector of optional entities in the same
    ///   order as the provided ids
    /// * `Err` - An error if the query could not be executed
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}

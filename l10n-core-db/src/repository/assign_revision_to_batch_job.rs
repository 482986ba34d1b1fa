use async_trait::async_trait;
use sqlx::Database;

/// Repository trait transferring ownership of a revision from its chunk
/// execution to the completed batch job
///
/// Clears the chunk-execution reference and sets the job reference in one
/// update; the two columns are mutually exclusive after finalization.
#[async_trait]
pub trait AssignRevisionToBatchJob<DB: Database>: Send + Sync {
    /// Point `revision_id` at `batch_job_id`, clearing its chunk execution
    async fn assign_revision_to_batch_job(
        &self,
        revision_id: i64,
        batch_job_id: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

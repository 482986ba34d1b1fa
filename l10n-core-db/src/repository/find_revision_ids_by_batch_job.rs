use async_trait::async_trait;
use sqlx::Database;

/// Repository trait resolving the activity revisions written by the chunk
/// executions of one batch job
///
/// The returned ids are in ascending order; the finalizer merges into the
/// first (lowest) one, so the ordering is part of the contract.
#[async_trait]
pub trait FindRevisionIdsByBatchJob<DB: Database>: Send + Sync {
    /// Ids of all revisions owned by chunk executions of `batch_job_id`,
    /// ascending
    ///
    /// # Returns
    /// * `Ok(Vec<i64>)` - Possibly empty; a job that produced no audited
    ///   work legitimately has no revisions
    /// * `Err` - An error if the query could not be executed
    async fn find_revision_ids_by_batch_job(
        &self,
        batch_job_id: i64,
    ) -> Result<Vec<i64>, Box<dyn std::error::Error + Send + Sync>>;
}

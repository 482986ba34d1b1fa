use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One activity revision groups the audit-log entries written during a
///   single execution context (a request or one batch-job chunk execution).
/// - Ids are sequence-assigned; merge logic relies on ascending id order.
/// - `batch_job_chunk_execution_id` and `batch_job_id` are mutually
///   exclusive: a revision belongs to one chunk execution until the parent
///   job completes, after which the single surviving revision belongs to
///   the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRevisionModel {
    pub id: i64,

    pub timestamp: DateTime<Utc>,

    /// Person who caused the activity, when attributable
    pub author_id: Option<Uuid>,

    /// Activity kind label, e.g. "BATCH_MACHINE_TRANSLATE"
    pub activity_type: Option<HeaplessString<100>>,

    pub project_id: Option<i64>,

    pub batch_job_chunk_execution_id: Option<i64>,

    pub batch_job_id: Option<i64>,
}

impl Identifiable for ActivityRevisionModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

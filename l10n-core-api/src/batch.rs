use serde::{Deserialize, Serialize};

/// Kinds of batch jobs the platform runs over translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchJobType {
    MachineTranslate,
    PreTranslateByTm,
    DeleteKeys,
    TagKeys,
    SetTranslationsState,
}

/// Read-only view of a batch job as seen by collaborators outside the
/// job engine. `total_chunks` is fixed when the job is split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchJobDto {
    pub id: i64,
    pub project_id: i64,
    pub job_type: BatchJobType,
    pub total_chunks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchJobChunkExecutionStatus {
    Pending,
    Running,
    Success,
    Failed,
    Cancelled,
}

impl BatchJobChunkExecutionStatus {
    /// True for terminal states. A chunk in a terminal state will never
    /// write further activity.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }
}

/// Live execution state of one chunk, as published by the job engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionState {
    /// Set while the chunk is scheduled for another attempt; a retrying
    /// chunk does not count as committed even if a previous attempt was.
    pub retry: bool,
    /// Set once the chunk's own transaction has durably committed.
    pub transaction_committed: bool,
    pub status: BatchJobChunkExecutionStatus,
}

impl ExecutionState {
    /// A chunk counts towards finalization once it is done, not retrying,
    /// and its writes are visible to other transactions.
    pub fn is_durably_completed(&self) -> bool {
        !self.retry && self.transaction_committed && self.status.is_completed()
    }
}

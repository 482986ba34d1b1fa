use std::time::Duration;

use thiserror::Error;

/// Failure modes of batch-job activity finalization.
///
/// `MissingActivityRevision` is an invariant violation: the worker that
/// processes a terminal job event must already hold the revision written by
/// its own chunk. `ChunkWaitTimeout` means sibling chunk transactions never
/// became visible; the merge is not attempted, so the enclosing transaction
/// rolls back without touching the audit trail.
#[derive(Error, Debug)]
pub enum FinalizeError {
    #[error("activity revision is not set for the completed batch job")]
    MissingActivityRevision,

    #[error(
        "timed out waiting for chunks of batch job {job_id} to commit: \
         {committed} of {expected} committed after {waited:?}"
    )]
    ChunkWaitTimeout {
        job_id: i64,
        committed: usize,
        expected: usize,
        waited: Duration,
    },

    #[error("storage failure during activity merge: {0}")]
    Storage(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type FinalizeResult<T> = Result<T, FinalizeError>;

use sqlx::Database;

use crate::repository::{
    AssignRevisionToBatchJob, DeleteBatch, FindRevisionIdsByBatchJob, MergeDescribingEntities,
    MergeModifiedEntities,
};

/// The full set of storage operations the activity finalizer issues,
/// bundled so it can hold a single trait object
///
/// Blanket-implemented for any type providing the individual operations.
pub trait ActivityMergeOps<DB: Database>:
    FindRevisionIdsByBatchJob<DB>
    + MergeDescribingEntities<DB>
    + MergeModifiedEntities<DB>
    + DeleteBatch<DB>
    + AssignRevisionToBatchJob<DB>
{
}

impl<DB: Database, T> ActivityMergeOps<DB> for T where
    T: FindRevisionIdsByBatchJob<DB>
        + MergeDescribingEntities<DB>
        + MergeModifiedEntities<DB>
        + DeleteBatch<DB>
        + AssignRevisionToBatchJob<DB>
{
}

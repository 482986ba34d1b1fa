pub mod activity_merge_ops;
pub mod assign_revision_to_batch_job;
pub mod create_batch;
pub mod delete_batch;
pub mod find_by_revision_ids;
pub mod find_revision_ids_by_batch_job;
pub mod load_batch;
pub mod merge_describing_entities;
pub mod merge_modified_entities;

// Re-exports
pub use activity_merge_ops::*;
pub use assign_revision_to_batch_job::*;
pub use create_batch::*;
pub use delete_batch::*;
pub use find_by_revision_ids::*;
pub use find_revision_ids_by_batch_job::*;
pub use load_batch::*;
pub use merge_describing_entities::*;
pub use merge_modified_entities::*;

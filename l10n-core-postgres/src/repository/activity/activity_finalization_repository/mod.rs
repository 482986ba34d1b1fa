pub mod assign_revision_to_batch_job;
pub mod delete_revisions;
pub mod find_revision_ids_by_batch_job;
pub mod merge_describing_entities;
pub mod merge_modified_entities;
pub mod repo_impl;

pub use repo_impl::ActivityFinalizationRepositoryImpl;

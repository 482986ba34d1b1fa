pub mod create_batch;
pub mod find_by_revision_ids;
pub mod repo_impl;

pub use repo_impl::ModifiedEntityRepositoryImpl;

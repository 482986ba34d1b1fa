pub mod activity_finalization_repository;
pub mod activity_revision_repository;
pub mod describing_entity_repository;
pub mod modified_entity_repository;

#[cfg(test)]
pub mod test_utils;

pub use activity_finalization_repository::ActivityFinalizationRepositoryImpl;
pub use activity_revision_repository::ActivityRevisionRepositoryImpl;
pub use describing_entity_repository::DescribingEntityRepositoryImpl;
pub use modified_entity_repository::ModifiedEntityRepositoryImpl;

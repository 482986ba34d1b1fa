use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;

use crate::repository::activity::{
    ActivityFinalizationRepositoryImpl, ActivityRevisionRepositoryImpl,
    DescribingEntityRepositoryImpl, ModifiedEntityRepositoryImpl,
};
use crate::unit_of_work::UnitOfWork;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Begin a unit of work and create all activity repositories sharing
    /// its transaction. The repositories are registered as transaction
    /// participants on the unit of work.
    pub async fn begin_unit_of_work(
        &self,
    ) -> Result<(UnitOfWork, ActivityRepositories), Box<dyn Error + Send + Sync>> {
        let tx = self.pool.begin().await?;
        let mut unit_of_work = UnitOfWork::new(tx);
        let executor = unit_of_work.executor();

        let finalization_repository =
            Arc::new(ActivityFinalizationRepositoryImpl::new(executor.clone()));
        let revision_repository = Arc::new(ActivityRevisionRepositoryImpl::new(executor.clone()));
        let describing_entity_repository =
            Arc::new(DescribingEntityRepositoryImpl::new(executor.clone()));
        let modified_entity_repository =
            Arc::new(ModifiedEntityRepositoryImpl::new(executor.clone()));

        unit_of_work.register(finalization_repository.clone());
        unit_of_work.register(revision_repository.clone());
        unit_of_work.register(describing_entity_repository.clone());
        unit_of_work.register(modified_entity_repository.clone());

        Ok((
            unit_of_work,
            ActivityRepositories {
                finalization_repository,
                revision_repository,
                describing_entity_repository,
                modified_entity_repository,
            },
        ))
    }
}

pub struct ActivityRepositories {
    pub finalization_repository: Arc<ActivityFinalizationRepositoryImpl>,
    pub revision_repository: Arc<ActivityRevisionRepositoryImpl>,
    pub describing_entity_repository: Arc<DescribingEntityRepositoryImpl>,
    pub modified_entity_repository: Arc<ModifiedEntityRepositoryImpl>,
}

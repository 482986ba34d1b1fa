use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityModifiedEntityModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;

use crate::unit_of_work::{Executor, TransactionAware, TransactionResult};
use crate::utils::{get_heapless_string, TryFromRow};

pub struct ModifiedEntityRepositoryImpl {
    pub executor: Executor,
}

impl ModifiedEntityRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ActivityModifiedEntityModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActivityModifiedEntityModel {
            activity_revision_id: row.get("activity_revision_id"),
            entity_class: get_heapless_string(row, "entity_class")?,
            entity_id: row.get("entity_id"),
            modifications: row.get("modifications"),
        })
    }
}

#[async_trait]
impl TransactionAware for ModifiedEntityRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}

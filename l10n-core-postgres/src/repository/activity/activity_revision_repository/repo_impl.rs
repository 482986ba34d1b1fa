use async_trait::async_trait;
use l10n_core_db::models::activity::ActivityRevisionModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;

use crate::unit_of_work::{Executor, TransactionAware, TransactionResult};
use crate::utils::{get_optional_heapless_string, TryFromRow};

pub struct ActivityRevisionRepositoryImpl {
    pub executor: Executor,
}

impl ActivityRevisionRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ActivityRevisionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActivityRevisionModel {
            id: row.get("id"),
            timestamp: row.get("timestamp"),
            author_id: row.get("author_id"),
            activity_type: get_optional_heapless_string(row, "activity_type")?,
            project_id: row.get("project_id"),
            batch_job_chunk_execution_id: row.get("batch_job_chunk_execution_id"),
            batch_job_id: row.get("batch_job_id"),
        })
    }
}

#[async_trait]
impl TransactionAware for ActivityRevisionRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}

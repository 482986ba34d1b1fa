use chrono::Utc;
use heapless::String as HeaplessString;
use l10n_core_db::models::activity::{
    ActivityDescribingEntityModel, ActivityModifiedEntityModel, ActivityRevisionModel,
};
use serde_json::json;
use std::error::Error;

use crate::unit_of_work::Executor;

/// Insert a batch job row the way the external job engine would.
pub async fn create_test_batch_job(
    executor: &Executor,
    total_chunks: i32,
) -> Result<i64, Box<dyn Error + Send + Sync>> {
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO batch_job (project_id, job_type, total_chunks)
        VALUES (1, 'MACHINE_TRANSLATE', $1)
        RETURNING id
        "#,
    )
    .bind(total_chunks)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(id)
}

pub async fn create_test_chunk_execution(
    executor: &Executor,
    batch_job_id: i64,
) -> Result<i64, Box<dyn Error + Send + Sync>> {
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO batch_job_chunk_execution (batch_job_id, status)
        VALUES ($1, 'SUCCESS')
        RETURNING id
        "#,
    )
    .bind(batch_job_id)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(id)
}

pub fn create_test_revision(id: i64, chunk_execution_id: i64) -> ActivityRevisionModel {
    ActivityRevisionModel {
        id,
        timestamp: Utc::now(),
        author_id: None,
        activity_type: Some(HeaplessString::try_from("BATCH_MACHINE_TRANSLATE").unwrap()),
        project_id: Some(1),
        batch_job_chunk_execution_id: Some(chunk_execution_id),
        batch_job_id: None,
    }
}

pub fn create_test_describing_entity(
    revision_id: i64,
    entity_class: &str,
    entity_id: i64,
) -> ActivityDescribingEntityModel {
    ActivityDescribingEntityModel {
        activity_revision_id: revision_id,
        entity_class: HeaplessString::try_from(entity_class).unwrap(),
        entity_id,
        // origin marker identifies which duplicate survived a merge
        data: json!({ "origin": revision_id }),
    }
}

pub fn create_test_modified_entity(
    revision_id: i64,
    entity_id: i64,
) -> ActivityModifiedEntityModel {
    ActivityModifiedEntityModel {
        activity_revision_id: revision_id,
        entity_class: HeaplessString::try_from("Translation").unwrap(),
        entity_id,
        modifications: json!({ "text": { "old": null, "new": "hello" } }),
    }
}

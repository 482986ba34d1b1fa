//! Shared-transaction unit of work
//!
//! All repositories created for one request share a single Postgres
//! transaction through a cloneable `Executor`. The unit of work also owns
//! the `ActivityHolder`: callbacks registered there run once every
//! statement of the transaction has been issued, immediately before
//! commit, and may issue further statements through the executor as part
//! of the same commit. A failure in that stage rolls the whole transaction
//! back.

use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use l10n_core_db::batch::holder::ActivityHolder;
use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;

pub type TransactionResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Cloneable handle to the shared transaction of one unit of work
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }
}

/// Participants notified of the transaction outcome
#[async_trait]
pub trait TransactionAware: Send + Sync {
    async fn on_commit(&self) -> TransactionResult<()>;
    async fn on_rollback(&self) -> TransactionResult<()>;
}

pub struct UnitOfWork {
    executor: Executor,
    activity_holder: Arc<Mutex<ActivityHolder>>,
    participants: Vec<Arc<dyn TransactionAware>>,
}

impl UnitOfWork {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            executor: Executor::new(tx),
            activity_holder: Arc::new(Mutex::new(ActivityHolder::new())),
            participants: Vec::new(),
        }
    }

    pub fn executor(&self) -> Executor {
        self.executor.clone()
    }

    pub fn activity_holder(&self) -> Arc<Mutex<ActivityHolder>> {
        Arc::clone(&self.activity_holder)
    }

    pub fn register(&mut self, participant: Arc<dyn TransactionAware>) {
        self.participants.push(participant);
    }

    /// Run the after-flush stage, then commit.
    ///
    /// A failing after-flush callback aborts the transaction, so a failed
    /// activity merge leaves no partial state behind.
    pub async fn commit(self) -> TransactionResult<()> {
        let after_flush = {
            let mut holder = self.activity_holder.lock().await;
            holder.run_after_flush().await
        };
        if let Err(error) = after_flush {
            tracing::error!(%error, "after-flush stage failed, rolling back transaction");
            self.abort().await?;
            return Err(Box::new(error));
        }

        let transaction = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        transaction.commit().await?;
        for participant in &self.participants {
            participant.on_commit().await?;
        }
        Ok(())
    }

    pub async fn rollback(self) -> TransactionResult<()> {
        self.abort().await
    }

    async fn abort(&self) -> TransactionResult<()> {
        if let Some(transaction) = self.executor.tx.lock().await.take() {
            transaction.rollback().await?;
        }
        for participant in &self.participants {
            participant.on_rollback().await?;
        }
        Ok(())
    }
}

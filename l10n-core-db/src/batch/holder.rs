use std::future::Future;
use std::pin::Pin;

use l10n_core_api::error::{FinalizeError, FinalizeResult};

use crate::models::activity::ActivityRevisionModel;

pub type AfterFlushFuture = Pin<Box<dyn Future<Output = FinalizeResult<()>> + Send>>;
pub type AfterFlushCallback = Box<dyn FnOnce() -> AfterFlushFuture + Send>;

/// Per-unit-of-work activity context.
///
/// Tracks the revision the current execution context is writing into, and
/// callbacks to run after the unit of work's statements are staged but
/// before it commits. A callback may issue further statements; they become
/// part of the same commit, so a later rollback undoes them too.
#[derive(Default)]
pub struct ActivityHolder {
    pub activity_revision: Option<ActivityRevisionModel>,
    after_flush: Vec<AfterFlushCallback>,
}

impl ActivityHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a callback to run in the after-flush stage, in registration order
    pub fn register_after_flush(&mut self, callback: AfterFlushCallback) {
        self.after_flush.push(callback);
    }

    pub fn has_pending_callbacks(&self) -> bool {
        !self.after_flush.is_empty()
    }

    /// Drain and await all registered callbacks.
    ///
    /// Stops at the first failure; the unit of work treats any error as
    /// grounds to abort the whole transaction.
    pub async fn run_after_flush(&mut self) -> Result<(), FinalizeError> {
        let callbacks = std::mem::take(&mut self.after_flush);
        for callback in callbacks {
            callback().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn callbacks_run_in_registration_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut holder = ActivityHolder::new();

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            holder.register_after_flush(Box::new(move || {
                Box::pin(async move {
                    order.lock().unwrap().push(label);
                    Ok(())
                })
            }));
        }

        holder.run_after_flush().await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
        assert!(!holder.has_pending_callbacks());
    }

    #[tokio::test]
    async fn failing_callback_stops_the_run() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut holder = ActivityHolder::new();

        holder.register_after_flush(Box::new(|| {
            Box::pin(async { Err(FinalizeError::MissingActivityRevision) })
        }));
        let ran_clone = Arc::clone(&ran);
        holder.register_after_flush(Box::new(move || {
            Box::pin(async move {
                ran_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }));

        let result = holder.run_after_flush().await;
        assert!(matches!(result, Err(FinalizeError::MissingActivityRevision)));
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn run_is_a_no_op_without_callbacks() {
        let mut holder = ActivityHolder::new();
        assert!(!holder.has_pending_callbacks());
        holder.run_after_flush().await.unwrap();
    }
}

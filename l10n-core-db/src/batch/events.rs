use l10n_core_api::batch::BatchJobDto;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a batch job. Exactly one is raised per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchJobOutcome {
    Succeeded,
    Failed,
    Cancelled,
}

/// Raised by the job engine on the worker that processed the job's last
/// chunk. Activity finalization reacts to all three outcomes the same way:
/// the audit trail must be merged regardless of how the job ended.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJobCompletionEvent {
    pub outcome: BatchJobOutcome,
    pub job: BatchJobDto,
}

impl BatchJobCompletionEvent {
    pub fn succeeded(job: BatchJobDto) -> Self {
        Self {
            outcome: BatchJobOutcome::Succeeded,
            job,
        }
    }

    pub fn failed(job: BatchJobDto) -> Self {
        Self {
            outcome: BatchJobOutcome::Failed,
            job,
        }
    }

    pub fn cancelled(job: BatchJobDto) -> Self {
        Self {
            outcome: BatchJobOutcome::Cancelled,
            job,
        }
    }
}

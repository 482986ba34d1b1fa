use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// # Documentation
/// - Field-level change record attached to a revision.
/// - `modifications` maps field name to its old/new values.
/// - No natural dedup key; every row survives a merge, only its owning
///   revision id changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityModifiedEntityModel {
    pub activity_revision_id: i64,

    pub entity_class: HeaplessString<100>,

    pub entity_id: i64,

    /// Map of field name to { "old": .., "new": .. }
    pub modifications: serde_json::Value,
}

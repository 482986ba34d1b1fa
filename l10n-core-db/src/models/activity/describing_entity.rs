use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// # Documentation
/// - Names a domain entity (class + id) touched by a revision, with a
///   denormalized `data` snapshot used for display.
/// - Composite key: (activity_revision_id, entity_class, entity_id).
/// - Before finalization the same (entity_class, entity_id) pair may appear
///   under several sibling revisions of one batch job; the merge keeps only
///   the occurrence with the lowest revision id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDescribingEntityModel {
    pub activity_revision_id: i64,

    pub entity_class: HeaplessString<100>,

    pub entity_id: i64,

    /// Display snapshot of the entity at revision time
    pub data: serde_json::Value,
}

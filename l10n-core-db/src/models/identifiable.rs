/// Trait for entities identified by a server-assigned sequence id
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> i64;
}

pub mod activity_revision;
pub mod describing_entity;
pub mod modified_entity;

pub use activity_revision::*;
pub use describing_entity::*;
pub use modified_entity::*;

pub mod activity;
pub mod identifiable;

pub use identifiable::*;

pub mod batch;
pub mod error;

pub use batch::*;
pub use error::*;

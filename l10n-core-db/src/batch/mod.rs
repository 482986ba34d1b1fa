pub mod activity_finalizer;
pub mod events;
pub mod holder;
pub mod state;

pub use activity_finalizer::*;
pub use events::*;
pub use holder::*;
pub use state::*;

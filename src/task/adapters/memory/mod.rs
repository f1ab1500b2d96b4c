//! In-memory adapters for task sources and task state.

mod source;
mod state;

pub use source::StaticTaskSource;
pub use state::InMemoryTaskStateStore;

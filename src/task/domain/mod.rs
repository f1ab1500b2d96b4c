//! Domain model for task scoring.
//!
//! Tasks, their label multimap and the locally-owned state read by the
//! scoring engine. Nothing here performs I/O.

mod error;
mod ids;
mod label;
mod state;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use label::{Label, Labels, keys, values};
pub use state::{Goal, Marker, TaskState};
pub use task::Task;

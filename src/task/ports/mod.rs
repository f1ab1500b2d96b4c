//! Port contracts for the scoring engine.
//!
//! Ports define the seams to excluded collaborators: tracker connectors
//! behind [`TaskSource`] and the state manager behind [`TaskStateReader`].

pub mod source;
pub mod state;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
pub use state::TaskStateReader;

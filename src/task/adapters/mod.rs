//! Adapter implementations of the task ports.
//!
//! [`CachedSource`] and [`AggregatedSource`] compose other sources;
//! [`GoalTaskSource`] and the [`memory`] adapters are leaf sources.

mod aggregated;
mod cached;
mod goals;
pub mod memory;

pub use aggregated::AggregatedSource;
pub use cached::CachedSource;
pub use goals::{GOAL_NAMESPACE, GoalTaskSource};

//! Step definitions for task ranking scenarios.

mod given;
mod then;
mod when;
pub mod world;

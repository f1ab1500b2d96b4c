//! Taskrank: task aggregation and priority scoring.
//!
//! This crate merges work items from several trackers, annotates them with
//! locally-owned metadata and ranks them by a score that a task inherits from
//! its most urgent descendant.
//!
//! # Architecture
//!
//! Taskrank follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and label types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task sources and task state
//! - **Adapters**: Caching, aggregation and in-memory implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task model, sources and the scoring engine
//! - [`value_graph`]: Lazy cycle-tolerant evaluation used for propagation
//! - [`config`]: Team identities and score rules

pub mod config;
pub mod task;
pub mod value_graph;

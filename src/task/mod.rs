//! Task aggregation and scoring.
//!
//! Tasks are loaded from several sources, annotated with locally-owned state,
//! reconciled into flags and a base score, then ranked by a score propagated
//! up the parent/child hierarchy. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The scoring engine in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

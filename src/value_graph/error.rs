//! Errors raised while wiring a value graph.

use super::NodeId;
use thiserror::Error;

/// Errors returned by [`super::ValueGraph::add_child`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValueGraphError {
    /// The handle does not belong to this graph.
    #[error("node {0} is not part of this graph")]
    UnknownNode(NodeId),

    /// Constants cannot take children.
    #[error("node {0} is a constant and cannot take children")]
    ConstantHasNoChildren(NodeId),
}

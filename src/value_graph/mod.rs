//! Lazy, cycle-tolerant evaluation over a graph of integer nodes.
//!
//! A [`ValueGraph`] is an arena of [`ValueNode`]s addressed by [`NodeId`]
//! handles. Nodes only grow by appending children and are never removed.
//! Evaluation is recomputed on every call, so a mutation anywhere below a node
//! is visible the next time it is evaluated.
//!
//! Cycles are broken per evaluation path: a `Sum` or `Max` node reached again
//! while it is already being evaluated contributes `0` to that branch. Node
//! identity is the handle, never the node's value.
//!
//! ```
//! use taskrank::value_graph::ValueGraph;
//!
//! let mut graph = ValueGraph::new();
//! let x = graph.max([]);
//! let y = graph.max([]);
//! graph.add_child(x, y).expect("x accepts children");
//! graph.add_child(y, x).expect("y accepts children");
//! assert_eq!(graph.evaluate(x), 0);
//!
//! let ten = graph.constant(10);
//! let two = graph.constant(2);
//! graph.add_child(x, ten).expect("x accepts children");
//! graph.add_child(y, two).expect("y accepts children");
//! assert_eq!(graph.evaluate(x), 10);
//! assert_eq!(graph.evaluate(y), 10);
//! ```

mod error;

pub use error::ValueGraphError;

use std::collections::HashSet;
use std::fmt;

/// Handle to a node owned by a [`ValueGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the value graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// Fixed value with no children.
    Const(i64),
    /// Sum of the children's values.
    Sum(Vec<NodeId>),
    /// Maximum of the children's values, `0` when childless.
    Max(Vec<NodeId>),
}

/// Arena of value nodes.
#[derive(Debug, Clone, Default)]
pub struct ValueGraph {
    nodes: Vec<ValueNode>,
}

impl ValueGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a constant node.
    pub fn constant(&mut self, value: i64) -> NodeId {
        self.push(ValueNode::Const(value))
    }

    /// Adds a sum node with initial children.
    pub fn sum(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.push(ValueNode::Sum(children.into_iter().collect()))
    }

    /// Adds a max node with initial children.
    pub fn max(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.push(ValueNode::Max(children.into_iter().collect()))
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueGraphError::UnknownNode`] when either handle is not
    /// owned by this graph and [`ValueGraphError::ConstantHasNoChildren`] when
    /// `parent` is a constant.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), ValueGraphError> {
        if self.node(child).is_none() {
            return Err(ValueGraphError::UnknownNode(child));
        }
        match self.nodes.get_mut(parent.0) {
            Some(ValueNode::Sum(children) | ValueNode::Max(children)) => {
                children.push(child);
                Ok(())
            }
            Some(ValueNode::Const(_)) => Err(ValueGraphError::ConstantHasNoChildren(parent)),
            None => Err(ValueGraphError::UnknownNode(parent)),
        }
    }

    /// Returns the node behind a handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ValueNode> {
        self.nodes.get(id.0)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluates a node from scratch.
    ///
    /// Handles not owned by this graph evaluate to `0`.
    #[must_use]
    pub fn evaluate(&self, id: NodeId) -> i64 {
        let mut path = HashSet::new();
        self.evaluate_on_path(id, &mut path)
    }

    fn evaluate_on_path(&self, id: NodeId, path: &mut HashSet<NodeId>) -> i64 {
        let Some(node) = self.node(id) else {
            return 0;
        };
        match node {
            ValueNode::Const(value) => *value,
            ValueNode::Sum(children) => self
                .evaluate_children(id, children, path)
                .into_iter()
                .fold(0, i64::saturating_add),
            ValueNode::Max(children) => self
                .evaluate_children(id, children, path)
                .into_iter()
                .max()
                .unwrap_or(0),
        }
    }

    /// Evaluates every child with `id` on the path, yielding nothing when `id`
    /// is already being evaluated.
    fn evaluate_children(
        &self,
        id: NodeId,
        children: &[NodeId],
        path: &mut HashSet<NodeId>,
    ) -> Vec<i64> {
        if !path.insert(id) {
            return Vec::new();
        }
        let values = children
            .iter()
            .map(|child| self.evaluate_on_path(*child, path))
            .collect();
        path.remove(&id);
        values
    }

    fn push(&mut self, node: ValueNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

#[cfg(test)]
mod tests;

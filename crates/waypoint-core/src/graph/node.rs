//! Graph vertex record
//!
//! A `Node` is a passive record: it never validates its edges against a
//! graph. The owning [`Graph`](super::Graph) is responsible for keeping edge
//! targets consistent.

use super::types::{Edge, NodeId, Weight};

/// An identified vertex holding a value, an obstacle flag and its outgoing edges
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    id: NodeId,
    value: T,
    is_obstacle: bool,
    edges: Vec<Edge>,
}

impl<T> Node<T> {
    pub fn new(id: NodeId, value: T) -> Self {
        Self {
            id,
            value,
            is_obstacle: false,
            edges: Vec::new(),
        }
    }

    /// Create a node already marked as an obstacle
    pub fn obstacle(id: NodeId, value: T) -> Self {
        Self {
            is_obstacle: true,
            ..Self::new(id, value)
        }
    }

    pub fn with_edges(id: NodeId, value: T, edges: Vec<Edge>) -> Self {
        Self {
            edges,
            ..Self::new(id, value)
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the payload, returning the previous value
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }

    pub fn set_obstacle(&mut self, is_obstacle: bool) {
        self.is_obstacle = is_obstacle;
    }

    pub fn add_edge(&mut self, target: NodeId, weight: Weight) {
        self.edges.push(Edge::new(target, weight));
    }

    /// Drop every edge pointing at `target`, keeping the order of the rest.
    /// Returns the number of edges removed.
    pub fn remove_edges_to(&mut self, target: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.target != target);
        before - self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// First edge to `target` in storage order
    pub fn edge_to(&self, target: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.target == target)
    }

    pub fn edge_to_mut(&mut self, target: NodeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.target == target)
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

//! The weighted graph: node arena, value index and structural mutation
//!
//! Nodes live in an ID-keyed arena and edges refer to their targets by ID, so
//! removing a node can never leave a dangling reference behind in memory. A
//! failed mutation leaves the graph unchanged: endpoint existence (and the
//! obstacle rule for undirected edges) is checked before anything is written.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::{GraphError, Result};

use super::node::Node;
use super::types::{Edge, NodeId, Weight};

/// A mutable directed/undirected weighted graph owning all of its nodes.
///
/// `T` is the node payload. A secondary index maps each payload value to a
/// node ID; when two nodes share a value, the most recently inserted one wins
/// the index entry.
#[derive(Debug)]
pub struct Graph<T> {
    nodes: BTreeMap<NodeId, Node<T>>,
    ids_by_value: HashMap<T, NodeId>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            ids_by_value: HashMap::new(),
        }
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of stored directed edges (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    pub fn obstacle_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_obstacle()).count()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's payload, flag and edge weights.
    ///
    /// Changing a payload through this handle bypasses the value index; use
    /// [`Graph::set_value`] to keep lookups by value consistent.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&id)
    }

    /// Nodes in ascending ID order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// Node IDs in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn does_node_exist(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// True when both endpoints exist; says nothing about an edge between them
    pub fn is_valid_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.does_node_exist(from) && self.does_node_exist(to)
    }

    /// True when the edge `from -> to` exists and carries a non-negative weight
    pub fn is_valid_weight(&self, from: NodeId, to: NodeId) -> bool {
        self.is_valid_edge(from, to)
            && self
                .get_weight(from, to)
                .is_some_and(|weight| weight >= 0.0)
    }

    pub fn find_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes
            .get(&from)
            .is_some_and(|node| node.edge_to(to).is_some())
    }

    /// Weight of the first stored edge `from -> to`
    pub fn get_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.nodes
            .get(&from)
            .and_then(|node| node.edge_to(to))
            .map(|edge| edge.weight)
    }

    /// Outgoing edges of `id`, empty when the node does not exist
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.nodes.get(&id).map(Node::edges).unwrap_or(&[])
    }

    pub fn add_edge_directed(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.require_nodes(from, to)?;
        self.node_entry(from)?.add_edge(to, weight);
        Ok(())
    }

    /// Add `from -> to` and `to -> from` with the same weight.
    ///
    /// Fails with `ObstacleViolation` when either endpoint is an obstacle; no
    /// edge is written in that case.
    pub fn add_edge_undirected(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.require_nodes(from, to)?;

        for id in [from, to] {
            if self.nodes.get(&id).is_some_and(Node::is_obstacle) {
                tracing::debug!(from, to, obstacle = id, "undirected edge refused");
                return Err(GraphError::ObstacleViolation { id });
            }
        }

        self.node_entry(from)?.add_edge(to, weight);
        self.node_entry(to)?.add_edge(from, weight);
        Ok(())
    }

    /// Remove every `from -> to` edge. Missing nodes or edges are not an error.
    pub fn remove_edge_directed(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.remove_edges_to(to);
        }
    }

    pub fn remove_edge_undirected(&mut self, from: NodeId, to: NodeId) {
        self.remove_edge_directed(from, to);
        self.remove_edge_directed(to, from);
    }

    pub fn set_weight_directed(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.require_nodes(from, to)?;
        let edge = self
            .node_entry(from)?
            .edge_to_mut(to)
            .ok_or(GraphError::UnknownEdge { from, to })?;
        edge.weight = weight;
        Ok(())
    }

    /// Set the weight of both directions. Both edges must exist; if either is
    /// missing neither weight changes.
    pub fn set_weight_undirected(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.require_nodes(from, to)?;
        if !self.find_edge(from, to) {
            return Err(GraphError::UnknownEdge { from, to });
        }
        if !self.find_edge(to, from) {
            return Err(GraphError::UnknownEdge { from: to, to: from });
        }

        self.set_weight_directed(from, to, weight)?;
        self.set_weight_directed(to, from, weight)
    }

    pub fn set_obstacle(&mut self, id: NodeId, is_obstacle: bool) -> Result<()> {
        self.node_entry(id)?.set_obstacle(is_obstacle);
        Ok(())
    }

    fn require_nodes(&self, from: NodeId, to: NodeId) -> Result<()> {
        for id in [from, to] {
            if !self.does_node_exist(id) {
                tracing::debug!(from, to, missing = id, "edge endpoint not found");
                crate::bail_unknown_node!(id);
            }
        }
        Ok(())
    }

    fn node_entry(&mut self, id: NodeId) -> Result<&mut Node<T>> {
        match self.nodes.get_mut(&id) {
            Some(node) => Ok(node),
            None => crate::bail_unknown_node!(id),
        }
    }
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Take ownership of `node` and index it by ID and by value.
    ///
    /// A node whose ID is already present is rejected with `DuplicateId` and
    /// the existing node is left untouched.
    pub fn add_node(&mut self, node: Node<T>) -> Result<()> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            tracing::debug!(id, "duplicate node id rejected");
            return Err(GraphError::DuplicateId { id });
        }

        if let Some(previous) = self.ids_by_value.insert(node.value().clone(), id) {
            tracing::debug!(id, previous, "value index entry overwritten");
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// ID most recently indexed for `value`
    pub fn id_of(&self, value: &T) -> Option<NodeId> {
        self.ids_by_value.get(value).copied()
    }

    /// Replace a node's payload and re-index it. Returns the old payload.
    pub fn set_value(&mut self, id: NodeId, value: T) -> Result<T> {
        let Some(node) = self.nodes.get_mut(&id) else {
            crate::bail_unknown_node!(id);
        };
        let previous = node.set_value(value.clone());

        if self.ids_by_value.get(&previous) == Some(&id) {
            self.ids_by_value.remove(&previous);
        }
        self.ids_by_value.insert(value, id);
        Ok(previous)
    }

    /// Remove a node and every edge that points at it.
    ///
    /// Inbound edges are purged from all other nodes before the node is
    /// dropped from the arena. The value index entry is removed only if it
    /// still maps to this node. Returns the removed node (with its own
    /// outgoing edges intact).
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node<T>> {
        if !self.nodes.contains_key(&id) {
            tracing::debug!(id, "remove of unknown node");
            crate::bail_unknown_node!(id);
        }

        let mut purged = 0;
        for (other_id, node) in self.nodes.iter_mut() {
            if *other_id != id {
                purged += node.remove_edges_to(id);
            }
        }

        let Some(removed) = self.nodes.remove(&id) else {
            crate::bail_unknown_node!(id);
        };
        if self.ids_by_value.get(removed.value()) == Some(&id) {
            self.ids_by_value.remove(removed.value());
        }

        tracing::trace!(id, inbound_edges = purged, "node removed");
        Ok(removed)
    }

    /// Remove a node and hand back its payload
    pub fn take_node_value(&mut self, id: NodeId) -> Result<T> {
        self.remove_node(id).map(Node::into_value)
    }

    /// Insert the node if its ID is new, otherwise leave the existing node.
    /// Returns true when a node was inserted.
    pub(crate) fn ensure_node(&mut self, id: NodeId, value: &T) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.ids_by_value.insert(value.clone(), id);
        self.nodes.insert(id, Node::new(id, value.clone()));
        true
    }
}

use super::types::{Edge, NodeId};
use super::Graph;

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn contains(&self, id: NodeId) -> bool;
    fn outbound_edges(&self, id: NodeId) -> &[Edge];
    fn all_node_ids(&self) -> Vec<NodeId>;
}

impl<T> GraphProvider for Graph<T> {
    fn contains(&self, id: NodeId) -> bool {
        self.does_node_exist(id)
    }

    fn outbound_edges(&self, id: NodeId) -> &[Edge] {
        self.edges(id)
    }

    fn all_node_ids(&self) -> Vec<NodeId> {
        self.node_ids().collect()
    }
}

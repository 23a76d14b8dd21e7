use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::types::NodeId;
use crate::graph::{Graph, GraphProvider};

/// Breadth-first (level order) visitation from `start`.
///
/// Neighbors are enqueued in stored edge order and marked visited when
/// enqueued, so each node appears once.
#[tracing::instrument(skip(provider))]
pub fn bfs_order<P: GraphProvider + ?Sized>(provider: &P, start: NodeId) -> Result<Vec<NodeId>> {
    if !provider.contains(start) {
        crate::bail_unknown_node!(start);
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for edge in provider.outbound_edges(current) {
            if provider.contains(edge.target) && visited.insert(edge.target) {
                queue.push_back(edge.target);
            }
        }
    }

    tracing::trace!(visited = order.len(), "bfs complete");
    Ok(order)
}

impl<T> Graph<T> {
    pub fn bfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        bfs_order(self, start)
    }

    /// Node values in breadth-first visitation order
    pub fn bfs_values(&self, start: NodeId) -> Result<Vec<&T>> {
        Ok(self
            .bfs(start)?
            .into_iter()
            .filter_map(|id| self.node(id).map(|node| node.value()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{Edge, Node};

    fn graph(n: u32, edges: &[(NodeId, NodeId)]) -> Graph<u32> {
        let mut graph = Graph::new();
        for id in 0..n {
            graph.add_node(Node::new(id, id)).unwrap();
        }
        for &(from, to) in edges {
            graph.add_edge_directed(from, to, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_bfs_level_order() {
        let graph = graph(6, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (3, 0)]);
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bfs_follows_edge_storage_order() {
        let graph = graph(4, &[(0, 2), (0, 3), (0, 1)]);
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_bfs_visits_each_node_once() {
        let graph = graph(3, &[(0, 1), (0, 2), (1, 2), (2, 1), (0, 1)]);
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_unknown_start() {
        let graph = graph(1, &[]);
        assert!(matches!(
            graph.bfs(5),
            Err(GraphError::UnknownNode { id: 5 })
        ));
    }

    #[test]
    fn test_bfs_skips_dangling_targets() {
        let mut graph = Graph::new();
        graph
            .add_node(Node::with_edges(0, 0u32, vec![Edge::new(9, 1.0), Edge::new(1, 1.0)]))
            .unwrap();
        graph.add_node(Node::new(1, 1)).unwrap();
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_bfs_values() {
        let graph = graph(3, &[(0, 2), (0, 1)]);
        assert_eq!(graph.bfs_values(0).unwrap(), vec![&0, &2, &1]);
    }
}

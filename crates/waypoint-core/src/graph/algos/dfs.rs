use std::collections::HashSet;

use crate::error::Result;
use crate::graph::types::NodeId;
use crate::graph::{Graph, GraphProvider};

/// Depth-first visitation order from `start`.
///
/// Visits the current node, then descends into each outgoing edge target in
/// stored edge order; each node is visited at most once. Uses an explicit
/// stack, so deep graphs cannot exhaust the call stack. Edges to nodes that
/// are not in the graph are skipped.
#[tracing::instrument(skip(provider))]
pub fn dfs_order<P: GraphProvider + ?Sized>(provider: &P, start: NodeId) -> Result<Vec<NodeId>> {
    if !provider.contains(start) {
        crate::bail_unknown_node!(start);
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);

        // Reverse so the first stored edge is explored first
        for edge in provider.outbound_edges(current).iter().rev() {
            if !visited.contains(&edge.target) && provider.contains(edge.target) {
                stack.push(edge.target);
            }
        }
    }

    tracing::trace!(visited = order.len(), "dfs complete");
    Ok(order)
}

impl<T> Graph<T> {
    pub fn dfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        dfs_order(self, start)
    }

    /// Node values in depth-first visitation order
    pub fn dfs_values(&self, start: NodeId) -> Result<Vec<&T>> {
        Ok(self
            .dfs(start)?
            .into_iter()
            .filter_map(|id| self.node(id).map(|node| node.value()))
            .collect())
    }
}

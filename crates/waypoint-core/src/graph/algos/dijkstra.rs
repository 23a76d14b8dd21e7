use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::error::Result;
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{Distances, NodeId};
use crate::graph::{Graph, GraphProvider};

/// Single-source shortest distances from `start` to every node.
///
/// Unreachable nodes keep `f64::INFINITY`. The result is only correct when
/// every reachable edge weight is non-negative; negative weights are not
/// rejected (the validity scan flags them) and a warning is logged the first
/// time one is relaxed.
#[tracing::instrument(skip(provider))]
pub fn dijkstra<P: GraphProvider + ?Sized>(provider: &P, start: NodeId) -> Result<Distances> {
    if !provider.contains(start) {
        crate::bail_unknown_node!(start);
    }

    let mut distance: Distances = provider
        .all_node_ids()
        .into_iter()
        .map(|id| (id, f64::INFINITY))
        .collect();
    distance.insert(start, 0.0);

    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry::new(start, 0.0, 0.0)));
    let mut warned_negative = false;

    while let Some(Reverse(HeapEntry { node_id: current, .. })) = heap.pop() {
        if !finalized.insert(current) {
            continue;
        }

        let current_distance = distance.get(&current).copied().unwrap_or(f64::INFINITY);

        for edge in provider.outbound_edges(current) {
            let Some(known) = distance.get_mut(&edge.target) else {
                continue;
            };

            if edge.weight < 0.0 && !warned_negative {
                warned_negative = true;
                tracing::warn!(
                    from = current,
                    to = edge.target,
                    weight = edge.weight,
                    "negative edge weight relaxed; distances may be wrong"
                );
            }

            let candidate = current_distance + edge.weight;
            if candidate < *known {
                *known = candidate;
                heap.push(Reverse(HeapEntry::new(edge.target, candidate, candidate)));
            }
        }
    }

    tracing::trace!(finalized = finalized.len(), "dijkstra complete");
    Ok(distance)
}

impl<T> Graph<T> {
    pub fn dijkstra(&self, start: NodeId) -> Result<Distances> {
        dijkstra(self, start)
    }
}

#[cfg(test)]
mod tests;

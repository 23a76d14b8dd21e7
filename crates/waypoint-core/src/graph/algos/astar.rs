use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{GraphError, Result};
use crate::graph::algos::heuristic::{Heuristic, SquaredEuclidean};
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{Coordinates, NodeId, PathResult, Weight};
use crate::graph::Graph;

/// Single-pair shortest path from `start` to `goal` guided by `heuristic`.
///
/// Returns the node IDs from `start` to `goal` inclusive, or an empty path
/// when the open set runs out before `goal` is reached. Edges into obstacle
/// nodes are never followed; an obstacle start is still expanded. The path is
/// a cheapest one only when `heuristic` is admissible.
#[tracing::instrument(skip(graph, heuristic))]
pub fn a_star<T, H>(graph: &Graph<T>, start: NodeId, goal: NodeId, heuristic: &H) -> Result<Vec<NodeId>>
where
    H: Heuristic<T> + ?Sized,
{
    let Some(start_node) = graph.node(start) else {
        crate::bail_unknown_node!(start);
    };
    let Some(goal_node) = graph.node(goal) else {
        crate::bail_unknown_node!(goal);
    };
    let goal_value = goal_node.value();

    let mut g_score: HashMap<NodeId, Weight> = HashMap::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut open_set = BinaryHeap::new();

    g_score.insert(start, 0.0);
    let start_f = heuristic.estimate(start_node.value(), goal_value);
    open_set.push(Reverse(HeapEntry::new(start, start_f, 0.0)));
    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = open_set.pop() {
        let current = entry.node_id;
        if current == goal {
            tracing::trace!(expanded, "goal reached");
            return Ok(reconstruct_path(&came_from, current));
        }

        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        // A cheaper route to this node was queued after this entry
        if entry.cost > current_g {
            continue;
        }
        expanded += 1;

        for edge in graph.edges(current) {
            let Some(neighbor) = graph.node(edge.target) else {
                continue;
            };
            if neighbor.is_obstacle() {
                continue;
            }

            let tentative = current_g + edge.weight;
            let known = g_score.get(&edge.target).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                came_from.insert(edge.target, current);
                g_score.insert(edge.target, tentative);
                let f_score = tentative + heuristic.estimate(neighbor.value(), goal_value);
                open_set.push(Reverse(HeapEntry::new(edge.target, f_score, tentative)));
            }
        }
    }

    tracing::debug!(start, goal, expanded, "goal unreachable");
    Ok(Vec::new())
}

fn reconstruct_path(came_from: &HashMap<NodeId, NodeId>, mut current: NodeId) -> Vec<NodeId> {
    let mut path = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}

impl<T> Graph<T> {
    /// A* with a caller-supplied heuristic
    pub fn a_star_with<H>(&self, start: NodeId, goal: NodeId, heuristic: &H) -> Result<Vec<NodeId>>
    where
        H: Heuristic<T> + ?Sized,
    {
        a_star(self, start, goal, heuristic)
    }

    /// A* returning the path together with its total weight
    pub fn a_star_with_cost<H>(&self, start: NodeId, goal: NodeId, heuristic: &H) -> Result<PathResult>
    where
        H: Heuristic<T> + ?Sized,
    {
        let path = self.a_star_with(start, goal, heuristic)?;
        let cost = if path.is_empty() {
            None
        } else {
            Some(self.path_cost(&path)?)
        };

        Ok(PathResult {
            from: start,
            to: goal,
            path,
            cost,
        })
    }

    /// Sum of edge weights along `path`, using the first stored edge for
    /// each hop. A single-node path costs 0.
    pub fn path_cost(&self, path: &[NodeId]) -> Result<Weight> {
        if let Some(&first) = path.first() {
            if !self.does_node_exist(first) {
                crate::bail_unknown_node!(first);
            }
        }

        path.windows(2).try_fold(0.0, |total, hop| {
            self.get_weight(hop[0], hop[1])
                .map(|weight| total + weight)
                .ok_or(GraphError::UnknownEdge {
                    from: hop[0],
                    to: hop[1],
                })
        })
    }
}

impl<T: Coordinates> Graph<T> {
    /// A* with the squared Euclidean heuristic over the nodes' coordinates
    pub fn a_star(&self, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        a_star(self, start, goal, &SquaredEuclidean)
    }
}

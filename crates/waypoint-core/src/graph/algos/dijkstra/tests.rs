use super::*;
use crate::error::GraphError;
use crate::graph::{Edge, Node, Weight};
use proptest::prelude::*;

fn build(n: u32, edges: &[(NodeId, NodeId, Weight)]) -> Graph<u32> {
    let mut graph = Graph::new();
    for id in 0..n {
        graph.add_node(Node::new(id, id)).unwrap();
    }
    for &(from, to, weight) in edges {
        graph.add_edge_directed(from, to, weight).unwrap();
    }
    graph
}

/// Cheapest simple path cost by exhaustive enumeration
fn brute_force(graph: &Graph<u32>, start: NodeId) -> Distances {
    fn walk(
        graph: &Graph<u32>,
        current: NodeId,
        cost: Weight,
        on_path: &mut Vec<NodeId>,
        best: &mut Distances,
    ) {
        let entry = best.entry(current).or_insert(f64::INFINITY);
        if cost < *entry {
            *entry = cost;
        }
        for edge in graph.edges(current) {
            if !on_path.contains(&edge.target) {
                on_path.push(edge.target);
                walk(graph, edge.target, cost + edge.weight, on_path, best);
                on_path.pop();
            }
        }
    }

    let mut best: Distances = graph.node_ids().map(|id| (id, f64::INFINITY)).collect();
    walk(graph, start, 0.0, &mut vec![start], &mut best);
    best
}

#[test]
fn test_path_graph_distances() {
    let mut graph = build(3, &[]);
    graph.add_edge_undirected(0, 1, 1.0).unwrap();
    graph.add_edge_undirected(1, 2, 1.0).unwrap();

    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance[&0], 0.0);
    assert_eq!(distance[&1], 1.0);
    assert_eq!(distance[&2], 2.0);
}

#[test]
fn test_prefers_cheaper_longer_route() {
    let graph = build(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.5)]);
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance[&3], 3.5);
}

#[test]
fn test_unreachable_nodes_are_infinite() {
    let graph = build(3, &[(0, 1, 2.0), (2, 0, 1.0)]);
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance.len(), 3);
    assert_eq!(distance[&1], 2.0);
    assert!(distance[&2].is_infinite());
}

#[test]
fn test_unknown_start() {
    let graph = build(2, &[]);
    assert!(matches!(
        graph.dijkstra(4),
        Err(GraphError::UnknownNode { id: 4 })
    ));
}

#[test]
fn test_zero_weight_edges() {
    let graph = build(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance[&2], 0.0);
}

#[test]
fn test_obstacles_do_not_block_dijkstra() {
    let mut graph = build(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    graph.set_obstacle(1, true).unwrap();
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance[&2], 2.0);
}

#[test]
fn test_dangling_edges_are_ignored() {
    let mut graph = Graph::new();
    graph
        .add_node(Node::with_edges(0, 0u32, vec![Edge::new(8, 1.0)]))
        .unwrap();
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance.len(), 1);
    assert!(!distance.contains_key(&8));
}

/// Negative weights are accepted and the result can be wrong: node 2 is
/// finalized at distance 2 before the cheaper route through node 1 is seen.
#[test]
fn test_negative_weight_documented_limitation() {
    let graph = build(4, &[(0, 1, 5.0), (0, 2, 2.0), (1, 2, -10.0), (2, 3, 1.0)]);
    let distance = graph.dijkstra(0).unwrap();
    assert_eq!(distance[&2], -5.0);
    assert_eq!(distance[&3], 3.0);
    assert!(!graph.is_graph_valid());
}

fn arb_graph() -> impl Strategy<Value = (u32, Vec<(NodeId, NodeId, Weight)>)> {
    (1u32..7).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u8..10).prop_map(|(from, to, w)| (from, to, f64::from(w)));
        (Just(n), prop::collection::vec(edge, 0..16))
    })
}

proptest! {
    #[test]
    fn prop_dijkstra_matches_brute_force((n, edges) in arb_graph(), start_seed in 0u32..7) {
        let graph = build(n, &edges);
        let start = start_seed % n;

        let expected = brute_force(&graph, start);
        let actual = graph.dijkstra(start).unwrap();

        prop_assert_eq!(actual, expected);
    }
}

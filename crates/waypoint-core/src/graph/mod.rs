//! Weighted graph, traversal and path-finding operations
//!
//! Provides:
//! - `Graph`/`Node`: an ID-keyed node arena with directed and undirected edges
//! - validity scanning for dangling edges and negative weights
//! - DFS/BFS visitation order
//! - Dijkstra single-source distances and A* single-pair paths
//! - Graph provider trait the algorithms read adjacency through

pub mod algos;
pub mod node;
pub mod traversal;
pub mod types;
pub mod validate;
pub mod weighted;

pub use algos::heuristic::{
    Chebyshev, Euclidean, Heuristic, HeuristicKind, Manhattan, SquaredEuclidean, Zero,
};
pub use algos::{a_star, bfs_order, dfs_order, dijkstra};
pub use node::Node;
pub use traversal::GraphProvider;
pub use types::{Coordinates, Distances, Edge, NodeId, PathResult, Point, Weight};
pub use validate::{ValidityReport, Violation};
pub use weighted::Graph;

//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Depth-first visitation order (explicit stack)
//! - `bfs`: Breadth-first visitation order
//! - `dijkstra`: Single-source shortest distances
//! - `astar`: Single-pair shortest path guided by a heuristic
//! - `heuristic`: Pluggable A* distance estimates
//! - `shared`: Priority queue entry used by both searches

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod heuristic;
pub mod shared;

pub use astar::a_star;
pub use bfs::bfs_order;
pub use dfs::dfs_order;
pub use dijkstra::dijkstra;

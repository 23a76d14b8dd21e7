//! Waypoint Core Library
//!
//! Weighted graphs with caller-assigned node IDs: mutation, validity
//! scanning, DFS/BFS, Dijkstra, A*, grid construction and a line-oriented
//! text format.

pub mod config;
pub mod error;
pub mod graph;
pub mod grid;
pub mod logging;
pub mod persistence;

pub use error::{ExitCode, GraphError, Result};
pub use graph::{Graph, Node, NodeId, Point, Weight};
pub use persistence::{LoadMode, LoadReport};

//! CLI commands for waypoint

pub mod astar;
pub mod bench;
pub mod dijkstra;
pub mod dispatch;
pub mod grid;
pub mod helpers;
pub mod info;
pub mod traverse;
pub mod validate;

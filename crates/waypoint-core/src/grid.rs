//! Lattice graphs
//!
//! Node `row * width + col` holds the point `{col, row}`. Each cell links to
//! its right and down neighbors, and optionally down-right and down-left,
//! with undirected unit edges. Obstacle cells get no edges at all.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node, NodeId, Point};

#[derive(Debug, Clone)]
pub struct GridBuilder {
    width: u32,
    height: u32,
    diagonals: bool,
    obstacles: BTreeSet<NodeId>,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            diagonals: true,
            obstacles: BTreeSet::new(),
        }
    }

    pub fn diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn obstacle(mut self, id: NodeId) -> Self {
        self.obstacles.insert(id);
        self
    }

    pub fn obstacles(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.obstacles.extend(ids);
        self
    }

    /// Number of cells, or `None` when it does not fit a node ID
    pub fn cell_count(&self) -> Option<NodeId> {
        self.width.checked_mul(self.height)
    }

    /// ID of the cell at `(col, row)`
    pub fn id_at(&self, col: u32, row: u32) -> NodeId {
        row * self.width + col
    }

    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn build(&self) -> Result<Graph<Point>> {
        let cells = self
            .cell_count()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                GraphError::invalid_value("grid size", format!("{}x{}", self.width, self.height))
            })?;

        if let Some(&id) = self.obstacles.iter().find(|&&id| id >= cells) {
            crate::bail_unknown_node!(id);
        }

        let start = std::time::Instant::now();
        let mut graph = Graph::new();

        for row in 0..self.height {
            for col in 0..self.width {
                let id = self.id_at(col, row);
                let point = Point::new(f64::from(col), f64::from(row));
                let node = if self.obstacles.contains(&id) {
                    Node::obstacle(id, point)
                } else {
                    Node::new(id, point)
                };
                graph.add_node(node)?;
            }
        }

        for row in 0..self.height {
            for col in 0..self.width {
                let id = self.id_at(col, row);
                for neighbor in self.forward_neighbors(col, row) {
                    if self.obstacles.contains(&id) || self.obstacles.contains(&neighbor) {
                        continue;
                    }
                    graph.add_edge_undirected(id, neighbor, 1.0)?;
                }
            }
        }

        crate::trace_time!(start, "grid built", nodes = graph.len());
        Ok(graph)
    }

    fn forward_neighbors(&self, col: u32, row: u32) -> Vec<NodeId> {
        let mut neighbors = Vec::with_capacity(4);
        let has_right = col + 1 < self.width;
        let has_down = row + 1 < self.height;

        if has_right {
            neighbors.push(self.id_at(col + 1, row));
        }
        if has_down {
            neighbors.push(self.id_at(col, row + 1));
            if self.diagonals {
                if has_right {
                    neighbors.push(self.id_at(col + 1, row + 1));
                }
                if col > 0 {
                    neighbors.push(self.id_at(col - 1, row + 1));
                }
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_without_diagonals() {
        let graph = GridBuilder::new(3, 2).diagonals(false).build().unwrap();
        assert_eq!(graph.len(), 6);
        // 2 rows x 2 horizontal + 3 vertical, both directions
        assert_eq!(graph.edge_count(), (4 + 3) * 2);
        assert_eq!(graph.node(5).map(|n| *n.value()), Some(Point::new(2.0, 1.0)));
        assert_eq!(graph.get_weight(0, 1), Some(1.0));
        assert_eq!(graph.get_weight(3, 0), Some(1.0));
        assert!(!graph.find_edge(0, 4));
    }

    #[test]
    fn test_grid_with_diagonals() {
        let graph = GridBuilder::new(2, 2).build().unwrap();
        assert!(graph.find_edge(0, 3));
        assert!(graph.find_edge(1, 2));
        assert_eq!(graph.edge_count(), 6 * 2);
        assert!(graph.is_graph_valid());
    }

    #[test]
    fn test_obstacles_are_isolated() {
        let graph = GridBuilder::new(3, 3).obstacle(4).build().unwrap();
        let centre = graph.node(4).unwrap();
        assert!(centre.is_obstacle());
        assert_eq!(centre.degree(), 0);
        assert!(!graph.nodes().any(|n| n.edges().iter().any(|e| e.target == 4)));

        let route = graph
            .a_star_with_cost(0, 8, &crate::graph::Chebyshev)
            .unwrap();
        assert!(!route.path.contains(&4));
        assert_eq!(route.cost, Some(3.0));
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            GridBuilder::new(0, 4).build(),
            Err(GraphError::InvalidValue { .. })
        ));
        assert!(GridBuilder::new(u32::MAX, 2).build().is_err());
        assert!(matches!(
            GridBuilder::new(2, 2).obstacle(4).build(),
            Err(GraphError::UnknownNode { id: 4 })
        ));
    }

    #[test]
    fn test_corner_to_corner_distance() {
        let graph = GridBuilder::new(4, 4).build().unwrap();
        let distance = graph.dijkstra(0).unwrap();
        assert_eq!(distance[&15], 3.0);
        assert_eq!(graph.a_star(0, 15).unwrap(), vec![0, 5, 10, 15]);
    }
}

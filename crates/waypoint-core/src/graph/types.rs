use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;

/// Caller-assigned node identity, unique within a graph
pub type NodeId = u32;

/// Edge weight. Negative values can be stored but are flagged by validation.
pub type Weight = f64;

/// Shortest known distance from a source to every node in the graph.
/// Unreachable nodes map to `f64::INFINITY`.
pub type Distances = HashMap<NodeId, Weight>;

/// A directed edge stored on its source node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeId, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// A path between two nodes and its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: NodeId,
    pub to: NodeId,
    /// Node IDs from `from` to `to`, inclusive. Empty when `to` is unreachable.
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`, `None` when no path was found
    pub cost: Option<Weight>,
}

impl PathResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Payloads that carry a position on the plane, used by A* heuristics
pub trait Coordinates {
    fn coordinates(&self) -> (f64, f64);
}

/// A 2-D coordinate payload.
///
/// Equality and hashing work on the bit patterns of the coordinates so a
/// `Point` can key the graph's value index; `-0.0` is folded into `0.0`.
/// Text form is `{x, y}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn key(&self) -> (u64, u64) {
        (normalize(self.x).to_bits(), normalize(self.y).to_bits())
    }
}

fn normalize(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Coordinates for Point {
    fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| format!("expected '{{x, y}}', got '{}'", s.trim()))?;

        let mut parts = inner.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected two coordinates, got '{}'", s.trim()));
        };

        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid x coordinate '{}': {}", x.trim(), e))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid y coordinate '{}': {}", y.trim(), e))?;

        Ok(Point::new(x, y))
    }
}

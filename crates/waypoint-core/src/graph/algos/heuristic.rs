//! A* distance estimates
//!
//! A heuristic is admissible when it never overestimates the remaining path
//! cost; only then is the path A* returns guaranteed to be a cheapest one.
//!
//! - `Zero` is always admissible (A* degrades to Dijkstra).
//! - `Euclidean` is admissible when every edge weight is at least the
//!   straight-line distance between its endpoints.
//! - `Manhattan` is admissible on 4-connected unit grids but overestimates
//!   across unit-weight diagonal edges.
//! - `Chebyshev` is admissible on 8-connected unit grids.
//! - `SquaredEuclidean` is the historical default. It is admissible only
//!   while the remaining straight-line distance is at most 1, so on larger
//!   graphs it can return a path that is not the cheapest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::types::{Coordinates, Weight};

/// Estimates the remaining cost from one payload to the goal's payload
pub trait Heuristic<T: ?Sized> {
    fn estimate(&self, from: &T, goal: &T) -> Weight;
}

impl<T: ?Sized, F> Heuristic<T> for F
where
    F: Fn(&T, &T) -> Weight,
{
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        self(from, goal)
    }
}

fn deltas<T: Coordinates + ?Sized>(from: &T, goal: &T) -> (f64, f64) {
    let (x1, y1) = from.coordinates();
    let (x2, y2) = goal.coordinates();
    ((x1 - x2).abs(), (y1 - y2).abs())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl<T: Coordinates + ?Sized> Heuristic<T> for SquaredEuclidean {
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        let (dx, dy) = deltas(from, goal);
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<T: Coordinates + ?Sized> Heuristic<T> for Euclidean {
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        let (dx, dy) = deltas(from, goal);
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<T: Coordinates + ?Sized> Heuristic<T> for Manhattan {
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        let (dx, dy) = deltas(from, goal);
        dx + dy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl<T: Coordinates + ?Sized> Heuristic<T> for Chebyshev {
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        let (dx, dy) = deltas(from, goal);
        dx.max(dy)
    }
}

/// Always 0; works for any payload
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<T: ?Sized> Heuristic<T> for Zero {
    fn estimate(&self, _from: &T, _goal: &T) -> Weight {
        0.0
    }
}

/// Heuristic selected by name (config file, command line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    #[default]
    SquaredEuclidean,
    Euclidean,
    Manhattan,
    Chebyshev,
    Zero,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::SquaredEuclidean,
        HeuristicKind::Euclidean,
        HeuristicKind::Manhattan,
        HeuristicKind::Chebyshev,
        HeuristicKind::Zero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicKind::SquaredEuclidean => "squared-euclidean",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Chebyshev => "chebyshev",
            HeuristicKind::Zero => "zero",
        }
    }
}

impl<T: Coordinates + ?Sized> Heuristic<T> for HeuristicKind {
    fn estimate(&self, from: &T, goal: &T) -> Weight {
        match self {
            HeuristicKind::SquaredEuclidean => SquaredEuclidean.estimate(from, goal),
            HeuristicKind::Euclidean => Euclidean.estimate(from, goal),
            HeuristicKind::Manhattan => Manhattan.estimate(from, goal),
            HeuristicKind::Chebyshev => Chebyshev.estimate(from, goal),
            HeuristicKind::Zero => 0.0,
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| GraphError::invalid_value("heuristic", s))
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;

    const A: Point = Point { x: 0.0, y: 0.0 };
    const B: Point = Point { x: 3.0, y: -4.0 };

    #[test]
    fn test_estimates() {
        assert_eq!(SquaredEuclidean.estimate(&A, &B), 25.0);
        assert_eq!(Euclidean.estimate(&A, &B), 5.0);
        assert_eq!(Manhattan.estimate(&A, &B), 7.0);
        assert_eq!(Chebyshev.estimate(&A, &B), 4.0);
        assert_eq!(Heuristic::<Point>::estimate(&Zero, &A, &B), 0.0);
    }

    #[test]
    fn test_estimate_to_self_is_zero() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.estimate(&B, &B), 0.0, "{}", kind);
        }
    }

    #[test]
    fn test_closure_heuristic() {
        let scaled = |a: &Point, b: &Point| Euclidean.estimate(a, b) * 0.5;
        assert_eq!(scaled.estimate(&A, &B), 2.5);
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!(
            "squared-euclidean".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::SquaredEuclidean
        );
        assert_eq!(
            "Manhattan".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::Manhattan
        );
        assert_eq!(
            "squared_euclidean".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::SquaredEuclidean
        );
        assert!("octile".parse::<HeuristicKind>().is_err());
        assert_eq!(HeuristicKind::Chebyshev.to_string(), "chebyshev");
    }

    #[test]
    fn test_kind_default_matches_squared_euclidean() {
        assert_eq!(HeuristicKind::default(), HeuristicKind::SquaredEuclidean);
        assert_eq!(HeuristicKind::default().estimate(&A, &B), 25.0);
    }
}

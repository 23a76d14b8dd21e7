//! Whole-graph validity scan
//!
//! The scan reports problems but never repairs them. A graph is valid when
//! every node ID is unique, every edge target exists and no edge carries a
//! negative weight.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};

use super::types::{NodeId, Weight};
use super::Graph;

/// A single problem found by the validity scan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    DuplicateId { id: NodeId },
    DanglingEdge { from: NodeId, to: NodeId },
    NegativeWeight { from: NodeId, to: NodeId, weight: Weight },
    /// Weight that is not a number and so never compares as non-negative
    InvalidWeight { from: NodeId, to: NodeId },
}

impl Violation {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!(self.to_string()))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateId { id } => write!(f, "duplicate node id {}", id),
            Violation::DanglingEdge { from, to } => {
                write!(f, "node {} references missing node {}", from, to)
            }
            Violation::NegativeWeight { from, to, weight } => {
                write!(f, "negative weight {} on edge {} -> {}", weight, from, to)
            }
            Violation::InvalidWeight { from, to } => {
                write!(f, "weight on edge {} -> {} is not a number", from, to)
            }
        }
    }
}

/// Outcome of [`Graph::validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidityReport {
    pub nodes_checked: usize,
    pub edges_checked: usize,
    pub violations: Vec<Violation>,
}

impl ValidityReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` for a clean report, otherwise `GraphError::ValidityViolation`
    pub fn into_result(self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(GraphError::ValidityViolation {
                violations: self.violations,
            })
        }
    }
}

impl<T> Graph<T> {
    /// Scan every node and edge and collect all violations
    pub fn validate(&self) -> ValidityReport {
        let mut report = ValidityReport::default();
        let mut seen: HashSet<NodeId> = HashSet::new();

        for node in self.nodes() {
            report.nodes_checked += 1;
            if !seen.insert(node.id()) {
                report.violations.push(Violation::DuplicateId { id: node.id() });
            }
        }

        for node in self.nodes() {
            for edge in node.edges() {
                report.edges_checked += 1;
                if !self.does_node_exist(edge.target) {
                    report.violations.push(Violation::DanglingEdge {
                        from: node.id(),
                        to: edge.target,
                    });
                }
                if edge.weight.is_nan() {
                    report.violations.push(Violation::InvalidWeight {
                        from: node.id(),
                        to: edge.target,
                    });
                } else if edge.weight < 0.0 {
                    report.violations.push(Violation::NegativeWeight {
                        from: node.id(),
                        to: edge.target,
                        weight: edge.weight,
                    });
                }
            }
        }

        for violation in &report.violations {
            tracing::debug!(%violation, "validity violation");
        }

        report
    }

    /// True when [`Graph::validate`] finds no violations
    pub fn is_graph_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

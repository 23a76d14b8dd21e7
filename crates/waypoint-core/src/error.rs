//! Error types and exit codes for waypoint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad config values)
//! - 3: Data error (unknown node, malformed graph file, invalid graph)

mod macros;

use thiserror::Error;

use crate::graph::{NodeId, Violation};

/// Exit codes for the waypoint binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, bad graph file, validity violation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph structure errors (exit code 3)
    #[error("node already exists: {id}")]
    DuplicateId { id: NodeId },

    #[error("node not found: {id}")]
    UnknownNode { id: NodeId },

    #[error("edge not found: {from} -> {to}")]
    UnknownEdge { from: NodeId, to: NodeId },

    #[error("node {id} is an obstacle and cannot take an undirected edge")]
    ObstacleViolation { id: NodeId },

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("graph is invalid ({} violation(s)): {}", .violations.len(), summarize(.violations))]
    ValidityViolation { violations: Vec<Violation> },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl GraphError {
    /// Create a parse error for a line of a graph file (1-based)
    pub fn parse(line: usize, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::DuplicateId { .. }
            | GraphError::UnknownNode { .. }
            | GraphError::UnknownEdge { .. }
            | GraphError::ObstacleViolation { .. }
            | GraphError::Parse { .. }
            | GraphError::ValidityViolation { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::TomlSerialize(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateId { .. } => "duplicate_id",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::UnknownEdge { .. } => "unknown_edge",
            GraphError::ObstacleViolation { .. } => "obstacle_violation",
            GraphError::Parse { .. } => "parse_error",
            GraphError::ValidityViolation { .. } => "validity_violation",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::TomlSerialize(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            GraphError::Parse { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            GraphError::ValidityViolation { violations } => {
                error_obj["violations"] = serde_json::json!(violations
                    .iter()
                    .map(Violation::to_json)
                    .collect::<Vec<_>>());
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, GraphError>;

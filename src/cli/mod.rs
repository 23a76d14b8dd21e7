//! CLI argument parsing for waypoint
//!
//! Supports global flags: --config, --format, --quiet, --verbose,
//! --log-level, --log-json, --skip-malformed

pub mod format;
pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use parse::parse_heuristic;
use waypoint_core::graph::{HeuristicKind, NodeId};

pub use output::OutputFormat;

/// Waypoint - weighted graph traversal and path finding
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./waypoint.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `waypoint_core=trace`)
    #[arg(long, global = true, env = "WAYPOINT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Skip malformed lines in graph files instead of failing
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Visitation strategy for `traverse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TraversalOrder {
    #[default]
    Dfs,
    Bfs,
}

impl TraversalOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::Dfs => "dfs",
            TraversalOrder::Bfs => "bfs",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and edge counts and validity for a graph file
    Info {
        /// Graph file
        file: PathBuf,
    },

    /// Check a graph file for dangling edges and negative weights
    Validate {
        /// Graph file
        file: PathBuf,
    },

    /// List nodes in visitation order from a start node
    Traverse {
        /// Graph file
        file: PathBuf,

        /// Start node ID
        #[arg(long, short)]
        start: NodeId,

        /// Depth-first or breadth-first
        #[arg(long, value_enum, default_value = "dfs")]
        order: TraversalOrder,
    },

    /// Shortest distance from a start node to every node
    Dijkstra {
        /// Graph file
        file: PathBuf,

        /// Start node ID
        #[arg(long, short)]
        start: NodeId,
    },

    /// Shortest path between two nodes using A*
    Astar {
        /// Graph file
        file: PathBuf,

        /// Start node ID
        #[arg(long, short)]
        start: NodeId,

        /// Goal node ID
        #[arg(long, short)]
        goal: NodeId,

        /// Distance estimate (squared-euclidean, euclidean, manhattan, chebyshev, zero)
        #[arg(long, value_parser = parse_heuristic)]
        heuristic: Option<HeuristicKind>,
    },

    /// Write a lattice graph with unit edges
    Grid {
        /// Number of columns
        #[arg(long)]
        width: u32,

        /// Number of rows
        #[arg(long)]
        height: u32,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Node IDs to mark as obstacles (can be specified multiple times).
        ///
        /// The file format has no obstacle flag, so obstacle cells are
        /// written without edges and load back as ordinary isolated nodes.
        #[arg(long, action = clap::ArgAction::Append)]
        obstacle: Vec<NodeId>,

        /// Only connect right and down neighbors
        #[arg(long)]
        no_diagonals: bool,
    },

    /// Time Dijkstra and A* across an N x N grid
    Bench {
        /// Grid side length
        #[arg(long, default_value_t = 1000)]
        size: u32,

        /// Distance estimate for A* (defaults to the configured heuristic)
        #[arg(long, value_parser = parse_heuristic)]
        heuristic: Option<HeuristicKind>,
    },
}

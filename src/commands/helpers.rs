//! Shared helpers for commands that read a graph file

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use waypoint_core::error::Result;
use waypoint_core::graph::{Graph, Point, Weight};

/// Load a point graph using the configured load mode.
/// Skipped lines are reported on stderr unless `--quiet` or JSON output.
pub fn load_graph(ctx: &CommandContext, path: &Path) -> Result<Graph<Point>> {
    let (graph, report) = Graph::from_file(path, ctx.load_mode())?;

    if ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet {
        for skipped in &report.errors {
            eprintln!(
                "warning: {}:{}: {} (line skipped)",
                path.display(),
                skipped.line,
                skipped.reason
            );
        }
    }

    trace_command!(ctx.cli, ctx.start, "load_graph");
    Ok(graph)
}

/// Human form of a distance; unreachable nodes have no finite distance
pub fn format_distance(distance: Weight) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "unreachable".to_string()
    }
}

/// JSON form of a distance: `null` when unreachable
pub fn json_distance(distance: Weight) -> serde_json::Value {
    if distance.is_finite() {
        serde_json::json!(distance)
    } else {
        serde_json::Value::Null
    }
}

//! `waypoint info` command - summarize a graph file

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_graph;
use crate::output_by_format_result;
use waypoint_core::error::Result;

/// Execute the info command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = load_graph(ctx, file)?;
    let report = graph.validate();

    output_by_format_result!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "file": file.display().to_string(),
                    "nodes": graph.len(),
                    "edges": graph.edge_count(),
                    "valid": report.is_valid(),
                    "violations": report.violations.len(),
                }))?
            );
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            println!("file:      {}", file.display());
            println!("nodes:     {}", graph.len());
            println!("edges:     {}", graph.edge_count());
            if report.is_valid() {
                println!("valid:     yes");
            } else {
                println!("valid:     no ({} violation(s))", report.violations.len());
            }
        }
    )
}

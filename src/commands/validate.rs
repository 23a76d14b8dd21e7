//! `waypoint validate` command - report dangling edges and negative weights

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_graph;
use crate::output_by_format_result;
use waypoint_core::error::Result;

/// Execute the validate command.
/// Prints the report, then fails with a data error when the graph is invalid.
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = load_graph(ctx, file)?;
    let report = graph.validate();

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            for violation in &report.violations {
                println!("{}", violation);
            }
            if report.is_valid() && !ctx.cli.quiet {
                println!(
                    "valid: {} node(s), {} edge(s) checked",
                    report.nodes_checked, report.edges_checked
                );
            }
        }
    )?;

    report.into_result()
}

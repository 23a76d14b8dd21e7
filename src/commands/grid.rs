//! `waypoint grid` command - write a lattice graph

use std::path::Path;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::output_by_format_result;
use waypoint_core::error::Result;
use waypoint_core::graph::NodeId;
use waypoint_core::grid::GridBuilder;
use waypoint_core::persistence::print_graph;

pub struct GridOptions<'a> {
    pub width: u32,
    pub height: u32,
    pub out: Option<&'a Path>,
    pub obstacles: &'a [NodeId],
    pub diagonals: bool,
}

/// Execute the grid command.
/// Without `--out` the graph text goes to stdout and nothing else is printed.
pub fn execute(ctx: &CommandContext, options: GridOptions) -> Result<()> {
    let graph = GridBuilder::new(options.width, options.height)
        .diagonals(options.diagonals)
        .obstacles(options.obstacles.iter().copied())
        .build()?;
    trace_command!(ctx.cli, ctx.start, "build_grid");

    let Some(out) = options.out else {
        return print_graph(&graph);
    };

    graph.save_to_file(out)?;
    trace_command!(ctx.cli, ctx.start, "save_grid");

    output_by_format_result!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "out": out.display().to_string(),
                    "width": options.width,
                    "height": options.height,
                    "diagonals": options.diagonals,
                    "nodes": graph.len(),
                    "edges": graph.edge_count(),
                    "obstacles": graph.obstacle_count(),
                }))?
            );
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "Wrote {}x{} grid ({} nodes, {} edges) to {}",
                    options.width,
                    options.height,
                    graph.len(),
                    graph.edge_count(),
                    out.display()
                );
            }
        }
    )
}

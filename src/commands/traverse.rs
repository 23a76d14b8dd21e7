//! `waypoint traverse` command - DFS/BFS visitation order

use std::path::Path;

use crate::cli::TraversalOrder;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::load_graph;
use crate::output_by_format_result;
use waypoint_core::error::Result;
use waypoint_core::graph::NodeId;

/// Execute the traverse command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    start: NodeId,
    order: TraversalOrder,
) -> Result<()> {
    let graph = load_graph(ctx, file)?;

    let visited = match order {
        TraversalOrder::Dfs => graph.dfs(start)?,
        TraversalOrder::Bfs => graph.bfs(start)?,
    };
    trace_command!(ctx.cli, ctx.start, "traverse");

    output_by_format_result!(ctx.cli.format,
        json => {
            let nodes: Vec<_> = visited
                .iter()
                .filter_map(|&id| graph.node(id))
                .map(|node| serde_json::json!({ "id": node.id(), "value": node.value().to_string() }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "start": start,
                    "order": order.as_str(),
                    "visited": nodes,
                }))?
            );
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            for node in visited.iter().filter_map(|&id| graph.node(id)) {
                println!("{}\t{}", node.id(), node.value());
            }
        }
    )
}

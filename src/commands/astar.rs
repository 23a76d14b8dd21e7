//! `waypoint astar` command - single-pair shortest path

use std::path::Path;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::load_graph;
use crate::output_by_format_result;
use waypoint_core::error::Result;
use waypoint_core::graph::{HeuristicKind, NodeId};

/// Execute the astar command. An unreachable goal is not an error.
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    start: NodeId,
    goal: NodeId,
    heuristic: HeuristicKind,
) -> Result<()> {
    let graph = load_graph(ctx, file)?;
    let route = graph.a_star_with_cost(start, goal, &heuristic)?;
    trace_command!(ctx.cli, ctx.start, "astar");

    output_by_format_result!(ctx.cli.format,
        json => {
            let mut value = serde_json::to_value(&route)?;
            value["heuristic"] = serde_json::json!(heuristic.as_str());
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            match route.cost {
                Some(cost) if route.found() => {
                    let hops: Vec<String> = route.path.iter().map(|id| id.to_string()).collect();
                    println!("path: {}", hops.join(" -> "));
                    println!("cost: {}", cost);
                }
                _ => println!("no path from {} to {}", start, goal),
            }
        }
    )
}

//! `waypoint dijkstra` command - single-source distances

use std::path::Path;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::{format_distance, json_distance, load_graph};
use crate::output_by_format_result;
use waypoint_core::error::Result;
use waypoint_core::graph::NodeId;

/// Execute the dijkstra command
pub fn execute(ctx: &CommandContext, file: &Path, start: NodeId) -> Result<()> {
    let graph = load_graph(ctx, file)?;
    let distance = graph.dijkstra(start)?;
    trace_command!(ctx.cli, ctx.start, "dijkstra");

    let mut rows: Vec<(NodeId, f64)> = distance.into_iter().collect();
    rows.sort_by_key(|(id, _)| *id);

    output_by_format_result!(ctx.cli.format,
        json => {
            let distances: Vec<_> = rows
                .iter()
                .map(|&(id, d)| serde_json::json!({ "id": id, "distance": json_distance(d) }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "start": start,
                    "distances": distances,
                }))?
            );
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            for (id, d) in &rows {
                println!("{}\t{}", id, format_distance(*d));
            }
        }
    )
}

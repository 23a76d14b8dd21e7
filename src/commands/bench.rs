//! `waypoint bench` command - time Dijkstra and A* on an N x N grid

use std::time::{Duration, Instant};

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use waypoint_core::bail_usage;
use waypoint_core::error::Result;
use waypoint_core::graph::HeuristicKind;
use waypoint_core::grid::GridBuilder;

fn timed<R>(work: impl FnOnce() -> Result<R>) -> Result<(R, Duration)> {
    let start = Instant::now();
    let result = work()?;
    Ok((result, start.elapsed()))
}

/// Execute the bench command.
/// Dijkstra runs from the top-left corner; A* from there to the bottom-right.
pub fn execute(ctx: &CommandContext, size: u32, heuristic: HeuristicKind) -> Result<()> {
    if size == 0 {
        bail_usage!("--size must be at least 1");
    }

    let diagonals = ctx.config.grid.diagonals;
    let (graph, build_time) = timed(|| {
        GridBuilder::new(size, size)
            .diagonals(diagonals)
            .build()
    })?;
    let goal = size * size - 1;

    let (distance, dijkstra_time) = timed(|| graph.dijkstra(0))?;
    let (route, astar_time) = timed(|| graph.a_star_with_cost(0, goal, &heuristic))?;

    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "bench complete"
    );

    let shortest = distance.get(&goal).copied().unwrap_or(f64::INFINITY);

    output_by_format_result!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "size": size,
                    "nodes": graph.len(),
                    "edges": graph.edge_count(),
                    "heuristic": heuristic.as_str(),
                    "build_seconds": build_time.as_secs_f64(),
                    "dijkstra_seconds": dijkstra_time.as_secs_f64(),
                    "astar_seconds": astar_time.as_secs_f64(),
                    "dijkstra_distance": shortest,
                    "astar_cost": route.cost,
                    "astar_path_len": route.path.len(),
                }))?
            );
            Ok::<(), waypoint_core::error::GraphError>(())
        },
        human => {
            println!("grid:     {}x{} ({} nodes, {} edges)", size, size, graph.len(), graph.edge_count());
            println!("build:    {:.3}s", build_time.as_secs_f64());
            println!("dijkstra: {:.3}s (distance to {}: {})", dijkstra_time.as_secs_f64(), goal, shortest);
            match route.cost {
                Some(cost) => println!(
                    "astar:    {:.3}s ({}, {} nodes, cost {})",
                    astar_time.as_secs_f64(),
                    heuristic,
                    route.path.len(),
                    cost
                ),
                None => println!("astar:    {:.3}s ({}, no path)", astar_time.as_secs_f64(), heuristic),
            }
        }
    )
}

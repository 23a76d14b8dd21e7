//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypoint_core::config::WaypointConfig;
use waypoint_core::error::Result;
use waypoint_core::graph::HeuristicKind;
use waypoint_core::persistence::LoadMode;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: WaypointConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration relative to the current directory
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let (config, config_source) = WaypointConfig::discover(cli.config.as_deref(), &cwd)?;
        tracing::debug!(source = %config_source.describe(), "config resolved");

        Ok(Self { cli, config, start })
    }

    /// `--skip-malformed` wins over the configured load mode
    pub fn load_mode(&self) -> LoadMode {
        if self.cli.skip_malformed {
            LoadMode::SkipMalformed
        } else {
            self.config.persistence.load_mode
        }
    }

    pub fn heuristic(&self, requested: Option<HeuristicKind>) -> HeuristicKind {
        requested.unwrap_or(self.config.search.heuristic)
    }

    pub fn diagonals(&self, no_diagonals: bool) -> bool {
        !no_diagonals && self.config.grid.diagonals
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypoint {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted graph traversal and path finding.");
        println!();
        println!("Run `waypoint --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info { file } => commands::info::execute(ctx, file),
            Commands::Validate { file } => commands::validate::execute(ctx, file),
            Commands::Traverse { file, start, order } => {
                commands::traverse::execute(ctx, file, *start, *order)
            }
            Commands::Dijkstra { file, start } => commands::dijkstra::execute(ctx, file, *start),
            Commands::Astar {
                file,
                start,
                goal,
                heuristic,
            } => commands::astar::execute(ctx, file, *start, *goal, ctx.heuristic(*heuristic)),
            Commands::Grid {
                width,
                height,
                out,
                obstacle,
                no_diagonals,
            } => commands::grid::execute(
                ctx,
                commands::grid::GridOptions {
                    width: *width,
                    height: *height,
                    out: out.as_deref(),
                    obstacles: obstacle,
                    diagonals: ctx.diagonals(*no_diagonals),
                },
            ),
            Commands::Bench { size, heuristic } => {
                commands::bench::execute(ctx, *size, ctx.heuristic(*heuristic))
            }
        }
    }
}

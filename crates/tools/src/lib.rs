//! Command-line front end for the maze solver: argument parsing, config
//! resolution, and the text/JSON output the `maze-solver` binary prints.

pub mod config;
pub mod report;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use maze_core::{Pos, SearchOutcome, find_path, load_maze, render};

use crate::config::SolverConfig;
use crate::report::SolveReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find a shortest path through a text maze with A*",
    long_about = None
)]
pub struct Args {
    /// Path to the maze text file
    pub maze: PathBuf,

    /// Start cell as X,Y (defaults to the top-left corner)
    #[arg(long, value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Goal cell as X,Y (defaults to the bottom-right corner)
    #[arg(long, value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// TOML file with symbols and default endpoints
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the maze before solving it
    #[arg(long)]
    pub no_echo: bool,
}

pub fn parse_pos(value: &str) -> Result<Pos, String> {
    let (x, y) = value.split_once(',').ok_or_else(|| format!("expected X,Y, got {value:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x in {value:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y in {value:?}: {e}"))?;
    Ok(Pos::new(x, y))
}

/// Load, solve, and print one maze. Returns the run summary.
pub fn run(args: &Args, out: &mut impl Write) -> Result<SolveReport> {
    let config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    let symbols = config.symbols;

    let grid = load_maze(&args.maze, &symbols)
        .with_context(|| format!("Failed to load maze: {}", args.maze.display()))?;
    let (start, goal) = config.endpoints(&grid, args.start, args.goal);
    info!("solving {}x{} maze from {start} to {goal}", grid.width(), grid.height());

    let text = args.format == OutputFormat::Text;
    if text {
        writeln!(out, "Maze Width {} Height {}", grid.width(), grid.height())?;
        if !args.no_echo {
            write!(out, "{}", render(&grid, &symbols, None))?;
        }
        writeln!(
            out,
            "--------------Maze {}x{} loaded successfully--------------",
            grid.width(),
            grid.height()
        )?;
        writeln!(out, "--------------Finding Solution----------------------")?;
    }

    let timer = Instant::now();
    let solution = find_path(&grid, start, goal).context("Search rejected its endpoints")?;
    let elapsed = timer.elapsed().as_secs_f64();
    info!(
        "search finished: found={} expanded={} stale={} peak_frontier={}",
        solution.outcome.is_found(),
        solution.stats.expanded,
        solution.stats.stale_pops,
        solution.stats.peak_frontier
    );

    let report = SolveReport::new(&grid, start, goal, &solution, elapsed);
    match args.format {
        OutputFormat::Text => {
            match &solution.outcome {
                SearchOutcome::PathFound(path) => {
                    writeln!(out, "\n--------------SOLUTION FOUND--------------\n")?;
                    write!(out, "{}", render(&grid, &symbols, Some(path)))?;
                    writeln!(out, "Path length {} (cost {})", path.len(), path.cost())?;
                }
                SearchOutcome::NoPath => writeln!(out, "No solution found")?,
            }
            writeln!(out, "\nSolution time: {elapsed:.6} seconds")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)
                .with_context(|| "Failed to serialize report")?;
            writeln!(out)?;
        }
    }
    Ok(report)
}

//! Randomized cross-check of the A* solver against breadth-first search.

use std::collections::VecDeque;

use anyhow::{Result, bail};
use clap::Parser;
use log::debug;
use maze_core::{
    Cell, Grid, MAX_DIMENSION, Pos, SearchOutcome, Symbols, find_path, manhattan, neighbors, render,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
    /// Largest width and height to generate
    #[arg(short, long, default_value_t = 24)]
    max_size: usize,
    /// Percentage of blocked cells
    #[arg(short, long, default_value_t = 30)]
    density: u64,
}

fn below(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    (rng.next_u64() % bound as u64) as usize
}

fn random_maze(rng: &mut ChaCha8Rng, max_size: usize, density: u64) -> Result<(Grid, Pos, Pos)> {
    let width = 1 + below(rng, max_size);
    let height = 1 + below(rng, max_size);
    let mut cells: Vec<Cell> = (0..width * height)
        .map(|_| if rng.next_u64() % 100 < density { Cell::Blocked } else { Cell::Passable })
        .collect();
    let start = (below(rng, width), below(rng, height));
    let goal = (below(rng, width), below(rng, height));
    cells[start.1 * width + start.0] = Cell::Passable;
    cells[goal.1 * width + goal.0] = Cell::Passable;

    let grid = Grid::new(width, height, cells)?;
    Ok((grid, Pos::new(start.0 as i32, start.1 as i32), Pos::new(goal.0 as i32, goal.1 as i32)))
}

fn bfs_distance(grid: &Grid, start: Pos, goal: Pos) -> Option<u32> {
    let mut distance: Vec<Option<u32>> = vec![None; grid.len()];
    let mut queue = VecDeque::from([start]);
    distance[grid.index_of(start)?] = Some(0);
    while let Some(current) = queue.pop_front() {
        let d = distance[grid.index_of(current)?]?;
        if current == goal {
            return Some(d);
        }
        for next in neighbors(current) {
            if let Some(i) = grid.index_of(next).filter(|_| grid.is_traversable(next))
                && distance[i].is_none()
            {
                distance[i] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn check(grid: &Grid, start: Pos, goal: Pos) -> Result<()> {
    let solution = find_path(grid, start, goal)?;
    let expected = bfs_distance(grid, start, goal);
    match (&solution.outcome, expected) {
        (SearchOutcome::PathFound(path), Some(distance)) => {
            if path.cost() != distance {
                bail!("A* cost {} but BFS distance {distance}", path.cost());
            }
            if path.start() != start || path.goal() != goal {
                bail!("path endpoints {} -> {} do not match", path.start(), path.goal());
            }
            if let Some(cell) = path.cells().iter().find(|c| !grid.is_traversable(**c)) {
                bail!("path crosses blocked cell {cell}");
            }
            if let Some(step) = path.cells().windows(2).find(|w| manhattan(w[0], w[1]) != 1) {
                bail!("path jumps from {} to {}", step[0], step[1]);
            }
        }
        (SearchOutcome::NoPath, None) => {}
        (outcome, expected) => bail!("A* returned {outcome:?} but BFS distance is {expected:?}"),
    }
    debug!("{}x{} {start}->{goal}: {:?}", grid.width(), grid.height(), solution.stats);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.max_size == 0 || args.max_size > MAX_DIMENSION {
        bail!("max size must be between 1 and {}", MAX_DIMENSION);
    }

    println!("Starting A*/BFS cross-check on seed {} for {} mazes...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut solvable = 0;
    for iteration in 0..args.iterations {
        let (grid, start, goal) = random_maze(&mut rng, args.max_size, args.density.min(100))?;
        if let Err(e) = check(&grid, start, goal) {
            let rendered = render(&grid, &Symbols::default(), None);
            bail!("iteration {iteration}: {e}\nstart {start} goal {goal}\n{rendered}");
        }
        if bfs_distance(&grid, start, goal).is_some() {
            solvable += 1;
        }
    }

    println!("All {} mazes agree ({} solvable).", args.iterations, solvable);
    Ok(())
}

//! Machine-readable summary of one solver run.

use maze_core::{Grid, Pos, SearchStats, Solution};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub width: usize,
    pub height: usize,
    /// xxh3 fingerprint of the grid, as hex.
    pub fingerprint: String,
    pub start: Pos,
    pub goal: Pos,
    pub found: bool,
    pub cost: Option<u32>,
    pub path: Option<Vec<Pos>>,
    pub stats: SearchStats,
    pub elapsed_seconds: f64,
}

impl SolveReport {
    pub fn new(
        grid: &Grid,
        start: Pos,
        goal: Pos,
        solution: &Solution,
        elapsed_seconds: f64,
    ) -> Self {
        let path = solution.outcome.path();
        Self {
            width: grid.width(),
            height: grid.height(),
            fingerprint: format!("{:016x}", grid.fingerprint()),
            start,
            goal,
            found: path.is_some(),
            cost: path.map(|p| p.cost()),
            path: path.map(|p| p.cells().to_vec()),
            stats: solution.stats,
            elapsed_seconds,
        }
    }
}

//! A* driver over a [`Grid`] with 4-directional unit-cost moves.
//! This module owns the search loop and path reconstruction. It does not own
//! maze parsing or rendering; callers hand it a finished grid and get back the
//! ordered cells of the path.

use std::error::Error;
use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::manhattan;
use crate::nodes::{NodeId, NodeTable, Relaxation};
use crate::types::{Pos, neighbors};

/// Cost of moving to an orthogonal neighbor.
const STEP_COST: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateIssue {
    OutOfBounds { width: usize, height: usize },
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is outside the grid or on a blocked cell.
    InvalidCoordinate { endpoint: Endpoint, pos: Pos, issue: CoordinateIssue },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { endpoint, pos, issue } => match issue {
                CoordinateIssue::OutOfBounds { width, height } => {
                    write!(f, "{endpoint} {pos} is outside the {width}x{height} grid")
                }
                CoordinateIssue::Blocked => write!(f, "{endpoint} {pos} is not traversable"),
            },
        }
    }
}

impl Error for SearchError {}

/// Ordered cells from start to goal, both inclusive. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit steps taken.
    pub fn cost(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    pub fn goal(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    PathFound(Path),
    NoPath,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(path) => Some(path),
            Self::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped and closed.
    pub expanded: usize,
    /// Distinct cells that received a node.
    pub discovered: usize,
    /// Frontier entries discarded because their node was already closed.
    pub stale_pops: usize,
    pub peak_frontier: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchState {
    Running,
    GoalFound(NodeId),
    Exhausted,
}

/// Find a shortest path from `start` to `goal`.
///
/// Equal-cost frontier entries are ordered by lower heuristic, then by
/// insertion order, and neighbors are expanded up, down, left, right, so the
/// same input always yields the same path.
pub fn find_path(grid: &Grid, start: Pos, goal: Pos) -> Result<Solution, SearchError> {
    validate_endpoint(grid, Endpoint::Start, start)?;
    validate_endpoint(grid, Endpoint::Goal, goal)?;

    let mut nodes = NodeTable::new(grid);
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    let estimate = |pos: Pos| manhattan(pos, goal);
    if let Relaxation::Inserted(id) = nodes.insert_or_update(start, 0, None, estimate) {
        let node = nodes.get(id);
        frontier.push(id, node.total_estimated_cost(), node.heuristic_cost);
    }

    let mut state = SearchState::Running;
    while state == SearchState::Running {
        let Some(entry) = frontier.pop_min() else {
            state = SearchState::Exhausted;
            continue;
        };
        let current = nodes.get(entry.node);
        if current.closed {
            stats.stale_pops += 1;
            continue;
        }
        if current.pos == goal {
            state = SearchState::GoalFound(entry.node);
            continue;
        }

        let (current_pos, current_cost) = (current.pos, current.cost_from_start);
        nodes.close(entry.node);
        stats.expanded += 1;
        trace!("expand {current_pos} g={current_cost} f={}", entry.total);

        for next in neighbors(current_pos) {
            if !grid.is_traversable(next) || nodes.is_closed(next) {
                continue;
            }
            let tentative = current_cost + STEP_COST;
            match nodes.insert_or_update(next, tentative, Some(entry.node), estimate) {
                Relaxation::Inserted(id) | Relaxation::Improved(id) => {
                    let node = nodes.get(id);
                    frontier.push(id, node.total_estimated_cost(), node.heuristic_cost);
                }
                Relaxation::Unchanged | Relaxation::OutOfBounds => {}
            }
        }
    }

    stats.discovered = nodes.len();
    stats.peak_frontier = frontier.peak_len();

    let outcome = match state {
        SearchState::GoalFound(id) => SearchOutcome::PathFound(Path { cells: nodes.path_to(id) }),
        SearchState::Exhausted | SearchState::Running => SearchOutcome::NoPath,
    };
    match &outcome {
        SearchOutcome::PathFound(path) => {
            debug!(
                "path {start} -> {goal}: cost {} after {} expansions",
                path.cost(),
                stats.expanded
            )
        }
        SearchOutcome::NoPath => {
            debug!(
                "no path {start} -> {goal}: frontier exhausted after {} expansions",
                stats.expanded
            )
        }
    }
    Ok(Solution { outcome, stats })
}

fn validate_endpoint(grid: &Grid, endpoint: Endpoint, pos: Pos) -> Result<(), SearchError> {
    let issue = match grid.cell(pos) {
        None => CoordinateIssue::OutOfBounds { width: grid.width(), height: grid.height() },
        Some(cell) if !cell.is_passable() => CoordinateIssue::Blocked,
        Some(_) => return Ok(()),
    };
    Err(SearchError::InvalidCoordinate { endpoint, pos, issue })
}

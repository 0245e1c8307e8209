use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell coordinate. Signed so neighbor offsets can step off the grid edge;
/// the grid decides whether a position is in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Passable,
    Blocked,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        self == Cell::Passable
    }
}

/// Orthogonal moves in expansion order: up, down, left, right.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub fn neighbors(p: Pos) -> [Pos; 4] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| p.offset(dx, dy))
}

//! Immutable traversability field the search runs on.
//! This module owns the only bounds check in the crate; everything else asks
//! `is_traversable` or `cell` and never indexes the cell vector directly.

use std::error::Error;
use std::fmt;
use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::types::{Cell, Pos};

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyDimension { width: usize, height: usize },
    /// Width or height is above [`MAX_DIMENSION`].
    TooLarge { width: usize, height: usize, max: usize },
    /// Cell count does not equal `width * height`.
    CellCountMismatch { expected: usize, found: usize },
    /// A row passed to [`Grid::from_rows`] has a different length than the first.
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {width}x{height}")
            }
            Self::TooLarge { width, height, max } => {
                write!(f, "grid {width}x{height} exceeds the maximum dimension {max}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            Self::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl Error for GridError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells.
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::TooLarge { width, height, max: MAX_DIMENSION });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch { expected, found: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }
        Self::new(width, height, cells)
    }

    /// Grid of the given size with every cell passable.
    pub fn open(width: usize, height: usize) -> Result<Self, GridError> {
        Self::new(width, height, vec![Cell::Passable; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `pos`, or `None` when it lies outside the grid.
    pub fn index_of(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    pub fn is_traversable(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(Cell::is_passable)
    }

    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Row slices from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Bottom-right corner, the default goal.
    pub fn far_corner(&self) -> Pos {
        Pos::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Stable content hash over dimensions and cells.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.width as u64);
        hasher.write_u64(self.height as u64);
        for cell in &self.cells {
            hasher.write_u8(match cell {
                Cell::Passable => 1,
                Cell::Blocked => 0,
            });
        }
        hasher.finish()
    }
}

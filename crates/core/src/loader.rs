//! Text maze ingestion.
//!
//! A maze file holds one row per line, each character being either the
//! passable or the blocked symbol. All rows must have the same length and
//! neither dimension may exceed [`MAX_DIMENSION`]. A trailing newline at the
//! end of the file and `\r\n` line endings are accepted.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridError, MAX_DIMENSION};
use crate::types::Cell;

/// Characters used for each cell kind, on input and when rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub passable: char,
    pub blocked: char,
    /// Marker drawn over cells on the solution path.
    pub path: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { passable: '*', blocked: '.', path: 'o' }
    }
}

impl Symbols {
    fn cell_for(&self, symbol: char) -> Option<Cell> {
        if symbol == self.passable {
            Some(Cell::Passable)
        } else if symbol == self.blocked {
            Some(Cell::Blocked)
        } else {
            None
        }
    }
}

/// Describes why a maze could not be loaded. Lines and columns are 1-indexed.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The input has no rows, or its first row is empty.
    Empty,
    /// Passable and blocked symbols are the same character.
    AmbiguousSymbols { symbol: char },
    InconsistentWidth { line: usize, expected: usize, found: usize },
    WidthExceeded { line: usize, width: usize, max: usize },
    HeightExceeded { height: usize, max: usize },
    UnknownSymbol { line: usize, column: usize, symbol: char },
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "maze I/O error: {e}"),
            Self::Empty => write!(f, "maze is empty"),
            Self::AmbiguousSymbols { symbol } => {
                write!(f, "passable and blocked symbols are both {symbol:?}")
            }
            Self::InconsistentWidth { line, expected, found } => {
                write!(
                    f,
                    "maze width is not consistent at line {line}: expected {expected}, found {found}"
                )
            }
            Self::WidthExceeded { line, width, max } => {
                write!(f, "maze width ({width}) at line {line} exceeds the maximum allowed ({max})")
            }
            Self::HeightExceeded { height, max } => {
                write!(f, "maze height ({height}) exceeds the maximum allowed ({max})")
            }
            Self::UnknownSymbol { line, column, symbol } => {
                write!(f, "unknown maze symbol {symbol:?} at line {line}, column {column}")
            }
            Self::Grid(e) => write!(f, "invalid maze grid: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Read and parse a maze file.
pub fn load_maze(path: &Path, symbols: &Symbols) -> Result<Grid, LoadError> {
    let content = fs::read_to_string(path).map_err(LoadError::Io)?;
    let grid = parse_maze(&content, symbols)?;
    debug!("loaded {}x{} maze from {}", grid.width(), grid.height(), path.display());
    Ok(grid)
}

/// Parse maze text into a grid.
pub fn parse_maze(text: &str, symbols: &Symbols) -> Result<Grid, LoadError> {
    if symbols.passable == symbols.blocked {
        return Err(LoadError::AmbiguousSymbols { symbol: symbols.passable });
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    let mut width = 0;
    let mut cells = Vec::new();
    for (index, raw) in lines.iter().copied().enumerate() {
        let line_number = index + 1;
        if line_number > MAX_DIMENSION {
            return Err(LoadError::HeightExceeded { height: line_number, max: MAX_DIMENSION });
        }

        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let found = line.chars().count();
        if index == 0 {
            if found == 0 {
                return Err(LoadError::Empty);
            }
            if found > MAX_DIMENSION {
                return Err(LoadError::WidthExceeded {
                    line: line_number,
                    width: found,
                    max: MAX_DIMENSION,
                });
            }
            width = found;
            cells.reserve(width * lines.len().min(MAX_DIMENSION));
        } else if found != width {
            return Err(LoadError::InconsistentWidth { line: line_number, expected: width, found });
        }

        for (column, symbol) in line.chars().enumerate() {
            let cell = symbols.cell_for(symbol).ok_or(LoadError::UnknownSymbol {
                line: line_number,
                column: column + 1,
                symbol,
            })?;
            cells.push(cell);
        }
    }

    if lines.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Grid::new(width, lines.len(), cells)?)
}

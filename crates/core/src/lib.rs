pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod loader;
pub mod nodes;
pub mod render;
pub mod search;
pub mod types;

pub use grid::{Grid, GridError, MAX_DIMENSION};
pub use heuristic::manhattan;
pub use loader::{LoadError, Symbols, load_maze, parse_maze};
pub use render::render;
pub use search::{
    CoordinateIssue, Endpoint, Path, SearchError, SearchOutcome, SearchStats, Solution, find_path,
};
pub use types::*;

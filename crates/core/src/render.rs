//! Text rendering of a grid with an optional solution path overlaid.

use crate::grid::Grid;
use crate::loader::Symbols;
use crate::search::Path;
use crate::types::Cell;

pub fn render(grid: &Grid, symbols: &Symbols, path: Option<&Path>) -> String {
    let mut marked = vec![false; grid.len()];
    if let Some(path) = path {
        for index in path.cells().iter().filter_map(|&pos| grid.index_of(pos)) {
            marked[index] = true;
        }
    }

    let mut out = String::with_capacity(grid.len() + grid.height());
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let symbol = match cell {
                _ if marked[y * grid.width() + x] => symbols.path,
                Cell::Passable => symbols.passable,
                Cell::Blocked => symbols.blocked,
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_maze;
    use crate::search::find_path;
    use crate::types::Pos;

    #[test]
    fn renders_grid_unchanged_without_path() {
        let text = "*.*\n*.*\n***\n";
        let grid = parse_maze(text, &Symbols::default()).expect("maze");
        assert_eq!(render(&grid, &Symbols::default(), None), text);
    }

    #[test]
    fn overlays_path_marker() {
        let symbols = Symbols::default();
        let grid = parse_maze("*.*\n*.*\n***\n", &symbols).expect("maze");
        let solution = find_path(&grid, Pos::new(0, 0), Pos::new(2, 2)).expect("search");

        let rendered = render(&grid, &symbols, solution.outcome.path());
        assert_eq!(rendered, "o.*\no.*\nooo\n");
    }

    #[test]
    fn uses_configured_symbols() {
        let input = Symbols::default();
        let output = Symbols { passable: ' ', blocked: '#', path: '@' };
        let grid = parse_maze("*.\n**\n", &input).expect("maze");
        let solution = find_path(&grid, Pos::new(0, 0), Pos::new(1, 1)).expect("search");

        assert_eq!(render(&grid, &output, solution.outcome.path()), "@#\n@@\n");
    }
}

use maze_core::{
    CoordinateIssue, Endpoint, Grid, Pos, SearchError, SearchOutcome, Symbols, find_path,
    parse_maze, render,
};

fn maze(text: &str) -> Grid {
    parse_maze(text, &Symbols::default()).expect("scenario maze should parse")
}

#[test]
fn test_reference_maze_is_solved_corner_to_corner() {
    let grid = maze(
        "*.******\n\
         *.*....*\n\
         *.*.**.*\n\
         *.*.*..*\n\
         ***.*.**\n\
         ....*.*.\n\
         ********\n",
    );
    let solution = find_path(&grid, Pos::new(0, 0), grid.far_corner()).expect("valid endpoints");

    let path = solution.outcome.path().expect("maze has a solution");
    assert_eq!(path.cost(), 23);
    assert_eq!(
        render(&grid, &Symbols::default(), Some(path)),
        "o.oooooo\n\
         o.o....o\n\
         o.o.**.o\n\
         o.o.*..o\n\
         ooo.*.oo\n\
         ....*.o.\n\
         ******oo\n"
    );
}

#[test]
fn test_separating_row_means_no_path() {
    let grid = maze("***\n...\n***\n");
    let solution = find_path(&grid, Pos::new(0, 0), grid.far_corner()).expect("valid endpoints");
    assert_eq!(solution.outcome, SearchOutcome::NoPath);
}

#[test]
fn test_blocked_corner_is_an_input_error() {
    let grid = maze("**\n*.\n");
    let err = find_path(&grid, Pos::new(0, 0), grid.far_corner()).unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidCoordinate {
            endpoint: Endpoint::Goal,
            pos: Pos::new(1, 1),
            issue: CoordinateIssue::Blocked,
        }
    );
}

#[test]
fn test_single_row_and_single_column_mazes() {
    let row = maze("*****\n");
    let solution = find_path(&row, Pos::new(0, 0), row.far_corner()).expect("valid endpoints");
    assert_eq!(solution.outcome.path().map(|p| p.cost()), Some(4));

    let column = maze("*\n*\n*\n");
    let solution =
        find_path(&column, Pos::new(0, 2), Pos::new(0, 0)).expect("valid endpoints");
    let path = solution.outcome.path().expect("column is open");
    assert_eq!(path.cells(), &[Pos::new(0, 2), Pos::new(0, 1), Pos::new(0, 0)]);
}

#[test]
fn test_large_open_grid_takes_manhattan_distance() {
    let grid = Grid::open(300, 200).expect("grid");
    let solution = find_path(&grid, Pos::new(0, 0), grid.far_corner()).expect("valid endpoints");
    assert_eq!(solution.outcome.path().map(|p| p.cost()), Some(299 + 199));
    // The consistent heuristic keeps expansion on the optimal band.
    assert!(solution.stats.expanded < grid.len() / 4);
}

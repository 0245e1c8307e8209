use maze_core::{Grid, Pos, Solution, Symbols, find_path, parse_maze};

const MAZE: &str = "\
*****.****
*...*.*..*
*.*.***.**
*.*.....*.
*.*****.**
*......*.*
****.*****
";

fn grid() -> Grid {
    parse_maze(MAZE, &Symbols::default()).expect("maze should parse")
}

#[test]
fn test_identical_grids_share_a_fingerprint() {
    assert_eq!(grid().fingerprint(), grid().fingerprint());

    let other = parse_maze(&MAZE.replacen('*', ".", 1), &Symbols::default()).expect("maze");
    assert_ne!(grid().fingerprint(), other.fingerprint());
}

#[test]
fn test_repeated_searches_return_the_same_cells_and_stats() {
    let grid = grid();
    let goal = Pos::new(9, 0);
    let runs: Vec<_> =
        (0..5).map(|_| find_path(&grid, Pos::new(0, 0), goal).expect("valid endpoints")).collect();

    assert!(runs[0].outcome.is_found(), "sample maze should be solvable");
    for run in &runs[1..] {
        assert_eq!(run, &runs[0], "searches over the same grid must agree exactly");
    }
}

#[test]
fn test_reversed_search_has_the_same_cost() {
    let grid = grid();
    let a = Pos::new(0, 0);
    let b = Pos::new(9, 0);
    let forward = find_path(&grid, a, b).expect("valid endpoints");
    let backward = find_path(&grid, b, a).expect("valid endpoints");

    let cost = |s: &Solution| s.outcome.path().map(|p| p.cost());
    assert_eq!(cost(&forward), cost(&backward));
}

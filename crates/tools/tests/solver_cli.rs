use std::fs;
use std::path::Path;

use anyhow::Result;
use maze_core::Pos;
use tempfile::tempdir;
use tools::report::SolveReport;
use tools::{Args, OutputFormat, run};

fn args(maze: &Path) -> Args {
    Args {
        maze: maze.to_path_buf(),
        start: None,
        goal: None,
        config: None,
        format: OutputFormat::Text,
        no_echo: false,
    }
}

fn run_to_string(args: &Args) -> (Result<SolveReport>, String) {
    let mut out = Vec::new();
    let result = run(args, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_text_output_echoes_maze_and_overlays_solution() {
    let dir = tempdir().expect("tempdir");
    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "*.*\n*.*\n***\n").expect("write maze");

    let (result, output) = run_to_string(&args(&maze));
    let report = result.expect("run should succeed");

    assert!(report.found);
    assert_eq!(report.cost, Some(4));
    assert!(output.starts_with("Maze Width 3 Height 3\n*.*\n*.*\n***\n"));
    assert!(output.contains("SOLUTION FOUND"));
    assert!(output.contains("o.*\no.*\nooo\n"));
    assert!(output.contains("Solution time:"));
}

#[test]
fn test_no_path_is_reported_but_not_an_error() {
    let dir = tempdir().expect("tempdir");
    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "**\n..\n**\n").expect("write maze");

    let mut a = args(&maze);
    a.no_echo = true;
    let (result, output) = run_to_string(&a);
    let report = result.expect("no path is still a successful run");

    assert!(!report.found);
    assert!(output.contains("No solution found"));
    assert!(!output.contains("**\n..\n**\n"));
}

#[test]
fn test_json_output_with_config_symbols_and_endpoints() {
    let dir = tempdir().expect("tempdir");
    let maze = dir.path().join("maze.txt");
    let config = dir.path().join("solver.toml");
    fs::write(&maze, "  #\n# #\n   \n").expect("write maze");
    fs::write(
        &config,
        "start = { x = 1, y = 0 }\n[symbols]\npassable = \" \"\nblocked = \"#\"\npath = \"+\"\n",
    )
    .expect("write config");

    let mut a = args(&maze);
    a.config = Some(config);
    a.goal = Some(Pos::new(2, 2));
    a.format = OutputFormat::Json;
    let (result, output) = run_to_string(&a);
    let report = result.expect("run should succeed");

    assert_eq!(report.start, Pos::new(1, 0));
    assert_eq!(report.goal, Pos::new(2, 2));
    assert_eq!(report.cost, Some(3));

    let json: serde_json::Value = serde_json::from_str(&output).expect("stdout is JSON");
    assert_eq!(json["found"], true);
    assert_eq!(json["width"], 3);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_invalid_inputs_surface_as_errors() {
    let dir = tempdir().expect("tempdir");

    let (result, _) = run_to_string(&args(&dir.path().join("missing.txt")));
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load maze"));

    let ragged = dir.path().join("ragged.txt");
    fs::write(&ragged, "***\n**\n").expect("write maze");
    let (result, _) = run_to_string(&args(&ragged));
    assert!(format!("{:#}", result.unwrap_err()).contains("not consistent"));

    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "**\n**\n").expect("write maze");
    let mut a = args(&maze);
    a.start = Some(Pos::new(5, 5));
    let (result, _) = run_to_string(&a);
    assert!(format!("{:#}", result.unwrap_err()).contains("outside the 2x2 grid"));
}

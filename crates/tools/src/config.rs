//! Optional TOML settings for the solver CLI.
//!
//! ```toml
//! start = { x = 0, y = 0 }
//! goal = { x = 9, y = 4 }
//!
//! [symbols]
//! passable = " "
//! blocked = "#"
//! path = "+"
//! ```
//!
//! Every key is optional; command-line flags take precedence.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use maze_core::{Grid, Pos, Symbols};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub symbols: Symbols,
    pub start: Option<Pos>,
    pub goal: Option<Pos>,
}

impl SolverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        let Symbols { passable, blocked, path } = config.symbols;
        if passable == blocked || path == passable || path == blocked {
            bail!("symbols must be distinct: {passable:?} {blocked:?} {path:?}");
        }
        Ok(config)
    }

    /// Endpoints after applying overrides, defaulting to the two opposite corners.
    pub fn endpoints(&self, grid: &Grid, start: Option<Pos>, goal: Option<Pos>) -> (Pos, Pos) {
        let start = start.or(self.start).unwrap_or(Pos::new(0, 0));
        let goal = goal.or(self.goal).unwrap_or_else(|| grid.far_corner());
        (start, goal)
    }
}

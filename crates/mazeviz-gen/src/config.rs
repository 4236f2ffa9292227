//! Generator configuration.

use std::fmt;
use std::str::FromStr;

use mazeviz_core::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::GenError;
use crate::fixed::{FIXED_MAZE_SIZE, generate_fixed_maze};
use crate::mapgen::MazeGen;

/// Which generator to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MazeKind {
    /// The 21×21 reference layout; dimensions and seed are ignored.
    #[default]
    Fixed,
    /// Recursive backtracker.
    Backtracker,
    /// Random walls plus a guaranteed staircase.
    Density,
}

impl MazeKind {
    pub const ALL: [MazeKind; 3] = [Self::Fixed, Self::Backtracker, Self::Density];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Backtracker => "backtracker",
            Self::Density => "density",
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, GenError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "default" => Ok(Self::Fixed),
            "backtracker" | "random" => Ok(Self::Backtracker),
            "density" => Ok(Self::Density),
            _ => Err(GenError::UnknownKind(s.to_string())),
        }
    }
}

/// Everything needed to produce a maze.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    pub kind: MazeKind,
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell starts as a wall (density generator only).
    pub wall_density: f64,
    /// Seed for a reproducible maze. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            kind: MazeKind::Fixed,
            rows: FIXED_MAZE_SIZE,
            cols: FIXED_MAZE_SIZE,
            wall_density: 0.3,
            seed: None,
        }
    }
}

impl GenConfig {
    /// Produce the configured maze.
    pub fn generate(&self) -> Result<Grid, GenError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut mg = MazeGen::with_rng(rng);
        match self.kind {
            MazeKind::Fixed => Ok(generate_fixed_maze()),
            MazeKind::Backtracker => Ok(mg.backtracker(self.rows, self.cols)?),
            MazeKind::Density => mg.density(self.rows, self.cols, self.wall_density),
        }
    }
}

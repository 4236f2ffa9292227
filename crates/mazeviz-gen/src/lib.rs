//! Maze generators for mazeviz.
//!
//! - [`generate_fixed_maze`]: the 21×21 reference layout.
//! - [`generate_backtracker_maze`]: recursive backtracker.
//! - [`generate_density_maze`]: random walls with a guaranteed path.
//!
//! The random generators take the random source as an argument, so a
//! seeded [`rand::rngs::StdRng`] yields the same maze every time.

pub mod config;
pub mod error;
pub mod fixed;
pub mod mapgen;

pub use config::{GenConfig, MazeKind};
pub use error::GenError;
pub use fixed::{FIXED_MAZE_CODES, FIXED_MAZE_SIZE, generate_fixed_maze};
pub use mapgen::{MazeGen, generate_backtracker_maze, generate_density_maze};

//! **mazeviz-core** — the maze grid model.
//!
//! This crate provides the foundational types shared by the *mazeviz*
//! searches and generators: zero-based [`Coord`]inates, the closed
//! [`CellKind`] enumeration, and the owned rectangular [`Grid`] together
//! with its neighbor rule and terminal lookup.
//!
//! Grids are values. Every operation that "modifies" a grid for display
//! purposes ([`Grid::reset_visualization`]) returns a new grid, and the
//! searches only ever borrow one.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use error::{GridError, Terminal};
pub use geom::{Coord, DIRECTIONS};
pub use grid::{Grid, Terminals};

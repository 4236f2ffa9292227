use std::fmt;

use mazeviz_core::{Coord, GridError, Terminal};

/// Precondition failures reported before a search runs.
///
/// An unreachable end is not an error: it is a normal
/// [`SearchResult`](crate::SearchResult) with `found == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid itself is unusable, or its terminals could not be located.
    Grid(GridError),
    /// A start or end coordinate outside the grid.
    OutOfBounds {
        terminal: Terminal,
        at: Coord,
        rows: usize,
        cols: usize,
    },
    /// A start or end coordinate on a wall.
    InvalidTerminal { terminal: Terminal, at: Coord },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::OutOfBounds {
                terminal,
                at,
                rows,
                cols,
            } => write!(
                f,
                "search: {terminal} {at} is outside the {rows}x{cols} grid"
            ),
            Self::InvalidTerminal { terminal, at } => {
                write!(f, "search: {terminal} {at} is a wall")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

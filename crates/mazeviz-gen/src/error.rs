use std::fmt;

use mazeviz_core::GridError;

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// The requested dimensions cannot hold a maze.
    Grid(GridError),
    /// Wall density outside `[0, 1]` (or NaN).
    InvalidDensity(f64),
    /// An unknown maze kind name.
    UnknownKind(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "mapgen: {e}"),
            Self::InvalidDensity(d) => write!(f, "mapgen: wall density {d} is not in [0, 1]"),
            Self::UnknownKind(s) => write!(f, "mapgen: unknown maze kind \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//! Errors raised while building or validating a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Coord;

/// Which endpoint of a search an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    Start,
    End,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors that can occur when constructing, editing or validating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The requested dimensions are below what an operation needs.
    TooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },
    /// `rows × cols` does not fit in memory.
    TooLarge { rows: usize, cols: usize },
    /// An integer cell code outside `0..=6`.
    InvalidCode { code: u8, at: Coord },
    /// A character that is not a cell glyph.
    InvalidGlyph { ch: char, at: Coord },
    /// A coordinate outside `[0, rows) × [0, cols)`.
    OutOfBounds { at: Coord, rows: usize, cols: usize },
    /// No Start or no End cell.
    MissingTerminal(Terminal),
    /// More than one Start or End cell.
    DuplicateTerminal {
        terminal: Terminal,
        first: Coord,
        second: Coord,
    },
}

impl GridError {
    /// Whether the error describes a malformed grid shape or content, as
    /// opposed to a bad coordinate or terminal.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Empty
                | Self::Ragged { .. }
                | Self::TooSmall { .. }
                | Self::TooLarge { .. }
                | Self::InvalidCode { .. }
                | Self::InvalidGlyph { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: zero rows or columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooSmall {
                rows,
                cols,
                min_rows,
                min_cols,
            } => write!(
                f,
                "grid: {rows}x{cols} is smaller than the minimum {min_rows}x{min_cols}"
            ),
            Self::TooLarge { rows, cols } => write!(f, "grid: {rows}x{cols} is too large"),
            Self::InvalidCode { code, at } => write!(f, "grid: invalid cell code {code} at {at}"),
            Self::InvalidGlyph { ch, at } => {
                write!(f, "grid: invalid cell glyph \u{201c}{ch}\u{201d} at {at}")
            }
            Self::OutOfBounds { at, rows, cols } => {
                write!(f, "grid: {at} is outside the {rows}x{cols} grid")
            }
            Self::MissingTerminal(t) => write!(f, "grid: no {t} cell"),
            Self::DuplicateTerminal {
                terminal,
                first,
                second,
            } => write!(f, "grid: more than one {terminal} cell ({first} and {second})"),
        }
    }
}

impl std::error::Error for GridError {}

//! Geometry primitives: [`Coord`] and the cardinal [`DIRECTIONS`].

use std::fmt;

/// Cardinal deltas `(drow, dcol)` in neighbor order: Up, Right, Down, Left.
///
/// The order decides traversal order in every search, and therefore which
/// of several equally short paths gets reported.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A zero-based `(row, col)` grid position. Rows grow down, columns right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the coordinate shifted by `(dr, dc)`, or `None` if either
    /// component would become negative.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// The cardinal neighbours in [`DIRECTIONS`] order. Positions that would
    /// fall off the top or left edge are `None`; the bottom/right edges are
    /// the grid's business.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Coord>; 4] {
        DIRECTIONS.map(|(dr, dc)| self.offset(dr, dc))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, the same order as [`Grid::iter`](crate::Grid::iter).
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

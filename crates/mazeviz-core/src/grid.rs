//! The maze [`Grid`]: a rectangular, owned array of [`CellKind`] values.
//!
//! Storage is a single row-major buffer. A `Grid` is a plain value: clone
//! it to get an independent copy, which is how callers keep the grid they
//! hand to a search apart from the one they paint.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::{GridError, Terminal};
use crate::geom::Coord;

/// The Start and End coordinates of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminals {
    pub start: Coord,
    pub end: Coord,
}

/// A rectangular maze of `rows × cols` cells.
///
/// Every constructor rejects zero dimensions and ragged input, so a `Grid`
/// value always has at least one cell and rows of identical length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<CellKind>>", into = "Vec<Vec<CellKind>>")
)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a `rows × cols` grid filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: CellKind) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { rows, cols })?;
        cells.resize(len, fill);
        Ok(Self { rows, cols, cells })
    }

    /// Number of cells in a `rows × cols` grid, or an error when either side
    /// is zero or the product cannot be allocated.
    pub fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        rows.checked_mul(cols)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { rows, cols })
    }

    /// Build a grid from nested rows of cell kinds.
    pub fn from_rows<R: AsRef<[CellKind]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::build(rows, |_, kind| Ok(*kind))
    }

    /// Build a grid from nested rows of integer cell codes
    /// (0=Empty, 1=Wall, 2=Start, 3=End, 4=Path, 5=Explored, 6=Current).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::build(rows, |at, &code| {
            CellKind::from_code(code).ok_or(GridError::InvalidCode { code, at })
        })
    }

    fn build<T, R: AsRef<[T]>>(
        rows: &[R],
        mut f: impl FnMut(Coord, &T) -> Result<CellKind, GridError>,
    ) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, v) in row.iter().enumerate() {
                cells.push(f(Coord::new(r, c), v)?);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    #[inline]
    fn index(&self, p: Coord) -> usize {
        p.row * self.cols + p.col
    }

    /// Convert a row-major index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// Number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Coord) -> Option<usize> {
        self.contains(p).then(|| self.index(p))
    }

    /// Get the cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<CellKind> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Set the cell at a coordinate.
    pub fn set(&mut self, p: Coord, kind: CellKind) -> Result<(), GridError> {
        let i = self.checked_idx(p)?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Like [`idx`](Self::idx) but with an [`GridError::OutOfBounds`] error.
    pub fn checked_idx(&self, p: Coord) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::OutOfBounds {
            at: p,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Count how many cells are of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Iterate over `(Coord, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &k)| (self.coord(i), k))
    }

    /// The cells of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[CellKind]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// The grid as nested rows of integer codes.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|r| r.iter().map(|k| k.code()).collect())
            .collect()
    }

    /// Passable, in-bounds cardinal neighbours of `p`, in Up, Right, Down,
    /// Left order. Wall cells are left out; every other kind is kept.
    ///
    /// A coordinate outside the grid has no neighbours.
    pub fn neighbors_of(&self, p: Coord) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the neighbours of `p` (see [`neighbors_of`](Self::neighbors_of))
    /// into `buf`. The caller clears `buf` before calling.
    pub fn neighbors_into(&self, p: Coord, buf: &mut Vec<Coord>) {
        if !self.contains(p) {
            return;
        }
        for n in p.neighbors_4().into_iter().flatten() {
            if self.at(n).is_some_and(CellKind::is_passable) {
                buf.push(n);
            }
        }
    }

    /// Scan row-major for the Start and End cells.
    ///
    /// Fails with [`GridError::MissingTerminal`] when either is absent and
    /// with [`GridError::DuplicateTerminal`] when either occurs twice.
    pub fn locate_terminals(&self) -> Result<Terminals, GridError> {
        let mut start: Option<Coord> = None;
        let mut end: Option<Coord> = None;
        for (p, kind) in self.iter() {
            let (slot, terminal) = match kind {
                CellKind::Start => (&mut start, Terminal::Start),
                CellKind::End => (&mut end, Terminal::End),
                _ => continue,
            };
            if let Some(first) = *slot {
                return Err(GridError::DuplicateTerminal {
                    terminal,
                    first,
                    second: p,
                });
            }
            *slot = Some(p);
        }
        Ok(Terminals {
            start: start.ok_or(GridError::MissingTerminal(Terminal::Start))?,
            end: end.ok_or(GridError::MissingTerminal(Terminal::End))?,
        })
    }

    /// A copy of the grid with every Path, Explored and Current cell turned
    /// back into Empty. Walls, terminals and empty cells are kept as is.
    pub fn reset_visualization(&self) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|&k| if k.is_annotation() { CellKind::Empty } else { k })
                .collect(),
        }
    }
}

/// Parse the glyph form produced by [`Display`](fmt::Display).
///
/// Lines are separated by `'\n'` and must all have the same width. Leading
/// and trailing whitespace is trimmed from the whole string and trailing
/// whitespace (including `'\r'`) from each line.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<CellKind>> = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let row = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    CellKind::from_glyph(ch).ok_or(GridError::InvalidGlyph {
                        ch,
                        at: Coord::new(r, c),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for k in row {
                write!(f, "{}", k.glyph())?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<CellKind>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<CellKind>> {
    fn from(grid: Grid) -> Self {
        grid.cells.chunks(grid.cols).map(<[CellKind]>::to_vec).collect()
    }
}

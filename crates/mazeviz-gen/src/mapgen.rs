//! Random maze generators.
//!
//! Provides two generators driven by a caller-supplied [`Rng`]:
//! - **Recursive backtracker**: carves a spanning tree of corridors out of a
//!   solid block of wall, two cells at a time.
//! - **Density maze**: scatters walls at random, then carves a monotone
//!   staircase from Start to End so a path always exists.

use mazeviz_core::{CellKind, Coord, Grid, GridError};
use rand::Rng;

use crate::error::GenError;

/// Carve steps for the backtracker: Up, Down, Left, Right by two cells.
const CARVE_STEPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Map generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze by randomized depth-first backtracking.
    ///
    /// 1. Start from a grid of walls and carve (1, 1).
    /// 2. From the cell on top of the stack, pick a random wall cell two
    ///    steps away that lies strictly inside the border, carve it and the
    ///    wall between, and push it. With no such cell, pop.
    /// 3. Write Start at (0, 0) and End at (rows-1, cols-1), then open a
    ///    short corridor from each to the nearest carved cell.
    ///
    /// Every carved cell is reachable from every other, and both terminals
    /// are linked in, so a path from Start to End always exists. Needs at
    /// least 3 rows and 3 columns.
    pub fn backtracker(&mut self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows < 3 || cols < 3 {
            return Err(GridError::TooSmall {
                rows,
                cols,
                min_rows: 3,
                min_cols: 3,
            });
        }
        let mut grid = Grid::new(rows, cols, CellKind::Wall)?;

        let origin = Coord::new(1, 1);
        grid.set(origin, CellKind::Empty)?;
        let mut stack = vec![origin];
        let mut carved = 1usize;

        let mut candidates: Vec<(Coord, Coord)> = Vec::with_capacity(4);
        while let Some(&cur) = stack.last() {
            candidates.clear();
            for (dr, dc) in CARVE_STEPS {
                let Some(next) = cur.offset(dr, dc) else {
                    continue;
                };
                let interior = next.row > 0
                    && next.row < rows - 1
                    && next.col > 0
                    && next.col < cols - 1;
                if interior && grid.at(next) == Some(CellKind::Wall) {
                    let Some(between) = cur.offset(dr / 2, dc / 2) else {
                        continue;
                    };
                    candidates.push((next, between));
                }
            }

            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let (next, between) = candidates[self.rng.random_range(0..candidates.len())];
            grid.set(next, CellKind::Empty)?;
            grid.set(between, CellKind::Empty)?;
            stack.push(next);
            carved += 1;
        }

        let start = Coord::new(0, 0);
        let end = Coord::new(rows - 1, cols - 1);
        grid.set(start, CellKind::Start)?;
        grid.set(end, CellKind::End)?;

        // Carve origins sit on odd coordinates strictly inside the border.
        let last_origin = Coord::new(last_odd_below(rows - 1), last_odd_below(cols - 1));
        open_corridor(&mut grid, start, origin)?;
        open_corridor(&mut grid, end, last_origin)?;

        log::debug!("backtracker: {rows}x{cols}, {carved} carve origins");
        Ok(grid)
    }

    /// Generate a maze by random wall placement plus a guaranteed staircase.
    ///
    /// 1. Each cell independently becomes Wall with probability
    ///    `wall_density`, otherwise Empty.
    /// 2. Start goes to (0, 0) and End to (rows-1, cols-1).
    /// 3. Walk from Start to End moving right or down (a coin flip when both
    ///    are possible, forced once an edge is reached), clearing each cell.
    /// 4. Re-assert Start and End, and clear their orthogonal neighbours.
    ///
    /// A path is guaranteed even at `wall_density == 1.0`. Needs at least two
    /// cells and a density in `[0, 1]`.
    pub fn density(
        &mut self,
        rows: usize,
        cols: usize,
        wall_density: f64,
    ) -> Result<Grid, GenError> {
        if !(0.0..=1.0).contains(&wall_density) {
            return Err(GenError::InvalidDensity(wall_density));
        }
        if Grid::checked_len(rows, cols)? < 2 {
            return Err(GridError::TooSmall {
                rows,
                cols,
                min_rows: 1,
                min_cols: 2,
            }
            .into());
        }

        let mut grid = Grid::new(rows, cols, CellKind::Empty)?;
        for r in 0..rows {
            for c in 0..cols {
                if self.rng.random::<f64>() < wall_density {
                    grid.set(Coord::new(r, c), CellKind::Wall)?;
                }
            }
        }

        let start = Coord::new(0, 0);
        let end = Coord::new(rows - 1, cols - 1);
        grid.set(start, CellKind::Start)?;
        grid.set(end, CellKind::End)?;

        let mut cur = start;
        grid.set(cur, CellKind::Empty)?;
        while cur != end {
            let go_right = if cur.row == end.row {
                true
            } else if cur.col == end.col {
                false
            } else {
                self.rng.random_bool(0.5)
            };
            if go_right {
                cur.col += 1;
            } else {
                cur.row += 1;
            }
            grid.set(cur, CellKind::Empty)?;
        }

        grid.set(start, CellKind::Start)?;
        grid.set(end, CellKind::End)?;
        for terminal in [start, end] {
            for n in terminal.neighbors_4().into_iter().flatten() {
                if grid.at(n) == Some(CellKind::Wall) {
                    grid.set(n, CellKind::Empty)?;
                }
            }
        }

        log::debug!(
            "density: {rows}x{cols} at {wall_density}, {} walls",
            grid.count(CellKind::Wall)
        );
        Ok(grid)
    }
}

/// Largest odd number strictly below `n` (`n >= 2`).
fn last_odd_below(n: usize) -> usize {
    if n % 2 == 0 { n - 1 } else { n - 2 }
}

/// Clear the cells on an L-shaped corridor from `from` to `to`: along
/// `from`'s row first, then along `to`'s column. `from` itself keeps its
/// kind.
fn open_corridor(grid: &mut Grid, from: Coord, to: Coord) -> Result<(), GridError> {
    let mut cur = from;
    while cur != to {
        if cur.col != to.col {
            cur.col = if cur.col < to.col { cur.col + 1 } else { cur.col - 1 };
        } else if cur.row < to.row {
            cur.row += 1;
        } else {
            cur.row -= 1;
        }
        if grid.at(cur) == Some(CellKind::Wall) {
            grid.set(cur, CellKind::Empty)?;
        }
    }
    Ok(())
}

/// Build a recursive-backtracker maze with an injected random source.
pub fn generate_backtracker_maze<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    MazeGen::with_rng(rng).backtracker(rows, cols)
}

/// Build a density maze with an injected random source.
pub fn generate_density_maze<R: Rng>(
    rows: usize,
    cols: usize,
    wall_density: f64,
    rng: &mut R,
) -> Result<Grid, GenError> {
    MazeGen::with_rng(rng).density(rows, cols, wall_density)
}

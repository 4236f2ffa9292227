//! The fixed 21×21 reference maze.

use mazeviz_core::Grid;

/// Side length of [`FIXED_MAZE_CODES`].
pub const FIXED_MAZE_SIZE: usize = 21;

/// The reference layout as integer cell codes (0=Empty, 1=Wall, 2=Start,
/// 3=End), row by row. Start sits at (0, 0) and End at (20, 20).
///
/// Note that End is boxed in by the walls at (19, 20) and (20, 19), so no
/// search can reach it from Start on this layout.
#[rustfmt::skip]
pub const FIXED_MAZE_CODES: [[u8; FIXED_MAZE_SIZE]; FIXED_MAZE_SIZE] = [
    [2, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0],
    [1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 3],
];

/// Build the reference maze. Always returns the same grid.
pub fn generate_fixed_maze() -> Grid {
    // The literal is rectangular, non-empty and uses only codes 0..=3.
    Grid::from_codes(&FIXED_MAZE_CODES).expect("reference maze literal is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeviz_core::{CellKind, Coord};
    use mazeviz_paths::{Algorithm, SearchOptions, Solver, StepEvent, StepKind, solve};

    #[test]
    fn shape_and_terminals() {
        let g = generate_fixed_maze();
        assert_eq!(g.rows(), 21);
        assert_eq!(g.cols(), 21);
        let t = g.locate_terminals().unwrap();
        assert_eq!(t.start, Coord::new(0, 0));
        assert_eq!(t.end, Coord::new(20, 20));
        assert_eq!(g.count(CellKind::Start), 1);
        assert_eq!(g.count(CellKind::End), 1);
    }

    #[test]
    fn reproduced_bit_exact() {
        let g = generate_fixed_maze();
        let codes = g.to_codes();
        for (row, expected) in codes.iter().zip(FIXED_MAZE_CODES.iter()) {
            assert_eq!(row.as_slice(), expected.as_slice());
        }
        assert_eq!(g.count(CellKind::Wall), 198);
        assert_eq!(generate_fixed_maze(), g);
    }

    #[test]
    fn end_is_unreachable() {
        let g = generate_fixed_maze();
        for a in Algorithm::ALL {
            let r = solve(&g, a, |_: StepEvent| {}).unwrap();
            assert!(!r.found, "{a}");
            assert_eq!(r.steps, 0);
        }
    }

    #[test]
    fn exploring_the_start_component() {
        // 242 cells are reachable from Start; all but Start itself get an
        // Explored event before the search gives up.
        let g = generate_fixed_maze();
        let solver = Solver::new(SearchOptions {
            emit_explored: true,
        });
        let t = solver
            .bfs(&g, Coord::new(0, 0), Coord::new(20, 20))
            .unwrap();
        assert!(!t.found);
        assert_eq!(t.events.len(), 241);
        assert!(t.events.iter().all(|e| e.kind == StepKind::Explored));
    }

    #[test]
    fn golden_path_lengths_to_bottom_row() {
        let g = generate_fixed_maze();
        let (s, e) = (Coord::new(0, 0), Coord::new(20, 18));
        let solver = Solver::default();
        let lengths: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&a| solver.run(a, &g, s, e).unwrap().path().count())
            .collect();
        assert_eq!(lengths, vec![41, 63, 41]);
        let bfs = solver.bfs(&g, s, e).unwrap();
        assert_eq!(
            bfs.path().take(3).collect::<Vec<_>>(),
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
        );
    }

    #[test]
    fn golden_explored_counts() {
        let g = generate_fixed_maze();
        let solver = Solver::new(SearchOptions {
            emit_explored: true,
        });
        let (s, e) = (Coord::new(0, 0), Coord::new(0, 20));
        let counts: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&a| {
                let t = solver.run(a, &g, s, e).unwrap();
                (t.path().count(), t.events.len() - t.path().count())
            })
            .collect();
        assert_eq!(counts, vec![(45, 184), (143, 219), (45, 95)]);
    }
}

use mazeviz_core::{Coord, Grid};

use crate::error::SearchError;
use crate::solver::Solver;
use crate::state::Trace;

impl Solver {
    /// Depth-first search from `start` to `end`.
    ///
    /// The frontier is a LIFO stack. A neighbour is marked visited and given
    /// its parent when it is pushed, not when it is popped, and the parent
    /// never changes afterwards. Finds a path if one exists, with no
    /// guarantee that it is short.
    pub fn dfs(&self, grid: &Grid, start: Coord, end: Coord) -> Result<Trace, SearchError> {
        let mut st = self.prepare(grid, start, end)?;
        log::debug!("dfs: {start} -> {end} on {}x{}", grid.rows(), grid.cols());

        let mut stack: Vec<usize> = vec![st.start];
        st.visited[st.start] = true;

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = stack.pop() {
            if ci == st.end {
                let trace = st.found();
                log::debug!("dfs: reached {end}, {} events", trace.events.len());
                return Ok(trace);
            }
            st.expand(ci);

            nbuf.clear();
            grid.neighbors_into(st.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let ni = st.idx(np);
                if !st.visited[ni] {
                    st.visited[ni] = true;
                    st.parent[ni] = Some(ci);
                    stack.push(ni);
                }
            }
        }

        log::debug!("dfs: {end} unreachable from {start}");
        Ok(st.exhausted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchOptions;
    use crate::step::StepKind;

    #[test]
    fn last_pushed_neighbour_goes_first() {
        // From S the stack holds [right, down]; down is popped first.
        let g: Grid = "S.\n.E".parse().unwrap();
        let t = Solver::default()
            .dfs(&g, Coord::new(0, 0), Coord::new(1, 1))
            .unwrap();
        assert!(t.found);
        assert_eq!(t.path().collect::<Vec<_>>(), vec![Coord::new(1, 0)]);
    }

    #[test]
    fn not_necessarily_shortest() {
        let g: Grid = "S..\n...\n..E".parse().unwrap();
        let t = Solver::default()
            .dfs(&g, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(t.found);
        assert_eq!(
            t.path().collect::<Vec<_>>(),
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(2, 1)]
        );
    }

    #[test]
    fn parent_fixed_at_push_time() {
        // (1,1) is pushed while expanding (1,0) and keeps that parent even
        // though (0,1) is also adjacent to it.
        let g: Grid = "\
S.#
..#
#.E"
        .parse()
        .unwrap();
        let solver = Solver::new(SearchOptions {
            emit_explored: true,
        });
        let t = solver.dfs(&g, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert!(t.found);
        let explored: Vec<_> = t
            .events
            .iter()
            .filter(|e| e.kind == StepKind::Explored)
            .map(|e| e.coord)
            .collect();
        assert_eq!(
            explored,
            vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(2, 1)]
        );
        assert_eq!(
            t.path().collect::<Vec<_>>(),
            vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(2, 1)]
        );
    }

    #[test]
    fn exhausted_stack() {
        let g: Grid = "S.#\n.##\n##E".parse().unwrap();
        let t = Solver::default()
            .dfs(&g, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(!t.found);
        assert_eq!(t.result().steps, 0);

        let t = Solver::new(SearchOptions {
            emit_explored: true,
        })
        .dfs(&g, Coord::new(0, 0), Coord::new(2, 2))
        .unwrap();
        assert!(!t.found);
        assert_eq!(t.result().steps, 2);
    }
}

use std::collections::VecDeque;

use mazeviz_core::{Coord, Grid};

use crate::error::SearchError;
use crate::solver::Solver;
use crate::state::Trace;

impl Solver {
    /// Breadth-first search from `start` to `end`.
    ///
    /// The frontier is a FIFO queue, so cells are expanded in nondecreasing
    /// distance order and the reconstructed path is a shortest one. Among
    /// equally short paths, the one discovered first in Up, Right, Down,
    /// Left neighbour order wins.
    pub fn bfs(&self, grid: &Grid, start: Coord, end: Coord) -> Result<Trace, SearchError> {
        let mut st = self.prepare(grid, start, end)?;
        log::debug!("bfs: {start} -> {end} on {}x{}", grid.rows(), grid.cols());

        let mut queue: VecDeque<usize> = VecDeque::new();
        st.visited[st.start] = true;
        queue.push_back(st.start);

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            if ci == st.end {
                let trace = st.found();
                log::debug!("bfs: reached {end}, {} events", trace.events.len());
                return Ok(trace);
            }
            st.expand(ci);

            nbuf.clear();
            grid.neighbors_into(st.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let ni = st.idx(np);
                if st.visited[ni] {
                    continue;
                }
                st.visited[ni] = true;
                st.parent[ni] = Some(ci);
                queue.push_back(ni);
            }
        }

        log::debug!("bfs: {end} unreachable from {start}");
        Ok(st.exhausted())
    }
}

use std::collections::BinaryHeap;

use mazeviz_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::solver::Solver;
use crate::state::{NodeRef, Trace, UNREACHABLE};

impl Solver {
    /// A* search from `start` to `end` with unit edge costs and the
    /// Manhattan distance to `end` as heuristic.
    ///
    /// The heuristic never overestimates on a 4-connected grid, so the
    /// reconstructed path is a shortest one. The open set is a binary heap
    /// keyed by `(f, insertion order)`: among equal f-scores the entry pushed
    /// first is expanded first. Superseded entries stay in the heap and are
    /// skipped when popped.
    pub fn astar(&self, grid: &Grid, start: Coord, end: Coord) -> Result<Trace, SearchError> {
        let mut st = self.prepare(grid, start, end)?;
        log::debug!("astar: {start} -> {end} on {}x{}", grid.rows(), grid.cols());

        let mut g_score = vec![UNREACHABLE; grid.len()];
        g_score[st.start] = 0;

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: st.start,
            f: manhattan(start, end),
            seq,
        });

        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if st.visited[ci] {
                continue;
            }
            st.visited[ci] = true;

            if ci == st.end {
                let trace = st.found();
                log::debug!("astar: reached {end}, {} events", trace.events.len());
                return Ok(trace);
            }
            st.expand(ci);

            let current_g = g_score[ci];
            nbuf.clear();
            grid.neighbors_into(st.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let ni = st.idx(np);
                let tentative_g = current_g + 1;
                if tentative_g >= g_score[ni] {
                    continue;
                }
                g_score[ni] = tentative_g;
                st.parent[ni] = Some(ci);
                if !st.visited[ni] {
                    seq += 1;
                    open.push(NodeRef {
                        idx: ni,
                        f: tentative_g + manhattan(np, end),
                        seq,
                    });
                }
            }
        }

        log::debug!("astar: {end} unreachable from {start}");
        Ok(st.exhausted())
    }
}

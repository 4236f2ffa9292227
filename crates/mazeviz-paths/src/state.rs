use std::future::Future;

use mazeviz_core::{Coord, Grid};

use crate::observer::Observer;
use crate::step::{SearchResult, StepEvent};

/// Sentinel g-score meaning "not reached yet" (the +infinity of A*).
pub(crate) const UNREACHABLE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-invocation search state
// ---------------------------------------------------------------------------

/// Visited marks, parent pointers and the expansion log of one search.
///
/// Allocated fresh by every search call and dropped when it returns.
/// Coordinates are stored as row-major indices into the grid.
pub(crate) struct SearchState<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<Option<usize>>,
    record_explored: bool,
    explored: Vec<StepEvent>,
}

impl<'g> SearchState<'g> {
    /// `start` and `end` must already be validated against `grid`.
    pub(crate) fn new(grid: &'g Grid, start: Coord, end: Coord, record_explored: bool) -> Self {
        let len = grid.len();
        Self {
            grid,
            start: start.row * grid.cols() + start.col,
            end: end.row * grid.cols() + end.col,
            visited: vec![false; len],
            parent: vec![None; len],
            record_explored,
            explored: Vec::new(),
        }
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Coord {
        self.grid.coord(idx)
    }

    /// Convert a neighbour `Coord` (always in bounds) to a flat index.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> usize {
        p.row * self.grid.cols() + p.col
    }

    /// Log an expansion. The start cell is never logged; the end cell is
    /// never expanded.
    #[inline]
    pub(crate) fn expand(&mut self, idx: usize) {
        log::trace!("expand {}", self.point(idx));
        if self.record_explored && idx != self.start {
            self.explored.push(StepEvent::explored(self.point(idx)));
        }
    }

    /// Walk the parent pointers back from `end` and return the cells strictly
    /// between start and end, in forward order.
    fn path_between(&self) -> Vec<Coord> {
        let mut path = Vec::new();
        if self.start == self.end {
            return path;
        }
        let mut ci = self.parent[self.end];
        while let Some(i) = ci {
            if i == self.start {
                break;
            }
            path.push(self.point(i));
            ci = self.parent[i];
        }
        path.reverse();
        path
    }

    /// Finish a search that reached `end`.
    pub(crate) fn found(self) -> Trace {
        let path = self.path_between();
        let mut events = self.explored;
        events.extend(path.into_iter().map(StepEvent::path));
        Trace {
            found: true,
            events,
        }
    }

    /// Finish a search whose frontier ran dry.
    pub(crate) fn exhausted(self) -> Trace {
        Trace {
            found: false,
            events: self.explored,
        }
    }
}

// ---------------------------------------------------------------------------
// Trace
// ---------------------------------------------------------------------------

/// The complete, ordered outcome of a search, computed before anything is
/// emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub found: bool,
    pub events: Vec<StepEvent>,
}

impl Trace {
    /// The result reported once every event has been emitted.
    pub fn result(&self) -> SearchResult {
        SearchResult {
            found: self.found,
            steps: self.events.len(),
        }
    }

    /// Only the path cells, start side first.
    pub fn path(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events
            .iter()
            .filter(|e| e.kind == crate::StepKind::PathSegment)
            .map(|e| e.coord)
    }

    /// Feed every event to `observer`, in order.
    pub fn emit<O: Observer>(self, mut observer: O) -> SearchResult {
        let result = self.result();
        for event in self.events {
            observer.observe(event);
        }
        result
    }

    /// Feed every event to `observer`, awaiting each returned future before
    /// the next event is produced.
    pub async fn emit_async<F, Fut>(self, mut observer: F) -> SearchResult
    where
        F: FnMut(StepEvent) -> Fut,
        Fut: Future<Output = ()>,
    {
        let result = self.result();
        for event in self.events {
            observer(event).await;
        }
        result
    }
}

// ---------------------------------------------------------------------------
// A* open-set entry
// ---------------------------------------------------------------------------

/// Reference into the grid, ordered by `f` then insertion sequence for use in
/// `BinaryHeap`, so equal f-scores pop first-in first-out.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: usize,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

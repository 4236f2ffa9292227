use std::fmt;
use std::future::Future;
use std::str::FromStr;

use mazeviz_core::{CellKind, Coord, Grid, Terminal};

use crate::error::SearchError;
use crate::observer::Observer;
use crate::state::{SearchState, Trace};
use crate::step::{SearchResult, StepEvent};

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The searches a caller can pick from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "DFS"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dfs, Self::AStar];

    /// Display name: `"BFS"`, `"DFS"` or `"A*"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
        }
    }

    /// Whether the reported path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected BFS, DFS or A*)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Case-insensitive; `"astar"` and `"a-star"` are accepted for A*.
impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Options shared by all searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Emit an `Explored` event for every expanded cell (start excluded)
    /// before the path events. Off by default: only the path is emitted,
    /// and an unsuccessful search emits nothing.
    pub emit_explored: bool,
}

/// Runs searches with a fixed set of [`SearchOptions`].
///
/// Each call validates its endpoints, allocates fresh search state, and
/// returns a complete [`Trace`]; nothing carries over between calls, so a
/// `Solver` can be shared freely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    options: SearchOptions,
}

impl Solver {
    /// Create a solver with the given options.
    pub const fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// The options this solver runs with.
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Check `start` and `end` against `grid` and allocate search state.
    pub(crate) fn prepare<'g>(
        &self,
        grid: &'g Grid,
        start: Coord,
        end: Coord,
    ) -> Result<SearchState<'g>, SearchError> {
        for (terminal, at) in [(Terminal::Start, start), (Terminal::End, end)] {
            match grid.at(at) {
                None => {
                    return Err(SearchError::OutOfBounds {
                        terminal,
                        at,
                        rows: grid.rows(),
                        cols: grid.cols(),
                    });
                }
                Some(CellKind::Wall) => {
                    return Err(SearchError::InvalidTerminal { terminal, at });
                }
                Some(_) => {}
            }
        }
        Ok(SearchState::new(
            grid,
            start,
            end,
            self.options.emit_explored,
        ))
    }

    /// Run `algorithm` and return its trace without emitting anything.
    pub fn run(
        &self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        end: Coord,
    ) -> Result<Trace, SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid, start, end),
            Algorithm::Dfs => self.dfs(grid, start, end),
            Algorithm::AStar => self.astar(grid, start, end),
        }
    }

    /// Run `algorithm` and feed its events to `observer`, in order.
    pub fn search<O: Observer>(
        &self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        end: Coord,
        observer: O,
    ) -> Result<SearchResult, SearchError> {
        let trace = self.run(algorithm, grid, start, end)?;
        Ok(trace.emit(observer))
    }

    /// Run `algorithm` and feed its events to an async `observer`, awaiting
    /// each call before producing the next event.
    pub async fn search_async<F, Fut>(
        &self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        end: Coord,
        observer: F,
    ) -> Result<SearchResult, SearchError>
    where
        F: FnMut(StepEvent) -> Fut,
        Fut: Future<Output = ()>,
    {
        let trace = self.run(algorithm, grid, start, end)?;
        Ok(trace.emit_async(observer).await)
    }

    /// Locate the grid's Start and End cells, then [`search`](Self::search)
    /// between them.
    pub fn solve<O: Observer>(
        &self,
        algorithm: Algorithm,
        grid: &Grid,
        observer: O,
    ) -> Result<SearchResult, SearchError> {
        let t = grid.locate_terminals()?;
        self.search(algorithm, grid, t.start, t.end, observer)
    }
}

/// [`Solver::search`] with default options.
pub fn search<O: Observer>(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coord,
    end: Coord,
    observer: O,
) -> Result<SearchResult, SearchError> {
    Solver::default().search(algorithm, grid, start, end, observer)
}

/// [`Solver::search_async`] with default options.
pub async fn search_async<F, Fut>(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coord,
    end: Coord,
    observer: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(StepEvent) -> Fut,
    Fut: Future<Output = ()>,
{
    Solver::default()
        .search_async(algorithm, grid, start, end, observer)
        .await
}

/// [`Solver::solve`] with default options.
pub fn solve<O: Observer>(
    grid: &Grid,
    algorithm: Algorithm,
    observer: O,
) -> Result<SearchResult, SearchError> {
    Solver::default().solve(algorithm, grid, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_on;
    use crate::step::StepKind;
    use mazeviz_core::GridError;
    use std::cell::RefCell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    // BFS and A* go along the top row; DFS takes the long way round.
    const MAZE: &str = "\
S.....E
.#####.
.#...#.
.#.#.#.
...#...";

    #[test]
    fn algorithm_names() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" bfs ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert!(Algorithm::Bfs.is_optimal());
        assert!(!Algorithm::Dfs.is_optimal());
    }

    #[test]
    fn start_equals_end() {
        let g: Grid = "S..".parse().unwrap();
        for a in Algorithm::ALL {
            let mut seen = Vec::new();
            let r = search(&g, a, Coord::ZERO, Coord::ZERO, |e: StepEvent| seen.push(e)).unwrap();
            assert_eq!(r, SearchResult { found: true, steps: 0 });
            assert!(seen.is_empty());
        }
    }

    #[test]
    fn vec_records_events() {
        let g: Grid = MAZE.parse().unwrap();
        let solver = Solver::new(SearchOptions {
            emit_explored: true,
        });
        assert!(solver.options().emit_explored);

        let mut events: Vec<StepEvent> = Vec::new();
        let r = solver.solve(Algorithm::Bfs, &g, &mut events).unwrap();
        assert!(r.found);
        assert_eq!(events.len(), r.steps);
        let path: Vec<Coord> = events
            .iter()
            .filter(|e| e.kind == StepKind::PathSegment)
            .map(|e| e.coord)
            .collect();
        assert_eq!(path, (1..6).map(|c| Coord::new(0, c)).collect::<Vec<_>>());
        let first_path = events
            .iter()
            .position(|e| e.kind == StepKind::PathSegment)
            .unwrap();
        assert!(events[..first_path].iter().all(|e| e.kind == StepKind::Explored));

        let owned = solver.solve(Algorithm::Bfs, &g, Vec::<StepEvent>::new()).unwrap();
        assert_eq!(owned, r);
    }

    #[test]
    fn adjacent_terminals_emit_nothing() {
        let g: Grid = "SE".parse().unwrap();
        for a in Algorithm::ALL {
            let r = solve(&g, a, |_: StepEvent| {}).unwrap();
            assert_eq!(r, SearchResult { found: true, steps: 0 });
        }
    }

    #[test]
    fn wall_terminal_rejected() {
        let g: Grid = "S#E".parse().unwrap();
        let err = search(&g, Algorithm::Bfs, Coord::ZERO, Coord::new(0, 1), |_: StepEvent| {})
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidTerminal {
                terminal: Terminal::End,
                at: Coord::new(0, 1)
            }
        );
        let err = search(&g, Algorithm::Dfs, Coord::new(0, 1), Coord::new(0, 2), |_: StepEvent| {})
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidTerminal {
                terminal: Terminal::Start,
                ..
            }
        ));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let g: Grid = "S.E".parse().unwrap();
        let err = search(&g, Algorithm::AStar, Coord::ZERO, Coord::new(1, 0), |_: StepEvent| {})
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                terminal: Terminal::End,
                at: Coord::new(1, 0),
                rows: 1,
                cols: 3
            }
        );
    }

    #[test]
    fn solve_requires_terminals() {
        let g: Grid = "S..".parse().unwrap();
        let err = solve(&g, Algorithm::Bfs, |_: StepEvent| {}).unwrap_err();
        assert_eq!(
            err,
            SearchError::Grid(GridError::MissingTerminal(Terminal::End))
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn no_path_is_not_an_error() {
        let g: Grid = "S#E".parse().unwrap();
        for a in Algorithm::ALL {
            let r = solve(&g, a, |_: StepEvent| {}).unwrap();
            assert_eq!(r, SearchResult { found: false, steps: 0 });
        }
    }

    #[test]
    fn steps_match_emitted_events() {
        let g: Grid = MAZE.parse().unwrap();
        for emit_explored in [false, true] {
            let solver = Solver::new(SearchOptions { emit_explored });
            for a in Algorithm::ALL {
                let mut seen = Vec::new();
                let r = solver.solve(a, &g, |e: StepEvent| seen.push(e)).unwrap();
                assert!(r.found);
                assert_eq!(r.steps, seen.len());
                let explored = seen.iter().filter(|e| e.kind == StepKind::Explored).count();
                assert_eq!(explored > 0, emit_explored);
            }
        }
    }

    #[test]
    fn emitted_path_is_contiguous() {
        let g: Grid = MAZE.parse().unwrap();
        let t = g.locate_terminals().unwrap();
        for a in Algorithm::ALL {
            let trace = Solver::default().run(a, &g, t.start, t.end).unwrap();
            let mut cells = vec![t.start];
            cells.extend(trace.path());
            cells.push(t.end);
            for w in cells.windows(2) {
                assert!(g.neighbors_of(w[0]).contains(&w[1]), "{a}: {} -> {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn maze_path_lengths() {
        let g: Grid = MAZE.parse().unwrap();
        let t = g.locate_terminals().unwrap();
        let lengths: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&a| Solver::default().run(a, &g, t.start, t.end).unwrap().path().count())
            .collect();
        assert_eq!(lengths, vec![5, 17, 5]);
    }

    #[test]
    fn bfs_and_astar_agree_on_length() {
        let grids = [
            MAZE,
            "S....\n.###.\n.#E#.\n.#.#.\n.....",
            "S.#......\n.##.####.\n...#...#.\n.#...#.#.\n.#####...\n......#.E",
            "S.........\n.#######..\n.......#..\n######.#..\nE.........",
        ];
        for text in grids {
            let g: Grid = text.parse().unwrap();
            let t = g.locate_terminals().unwrap();
            let bfs = Solver::default().bfs(&g, t.start, t.end).unwrap();
            let astar = Solver::default().astar(&g, t.start, t.end).unwrap();
            let dfs = Solver::default().dfs(&g, t.start, t.end).unwrap();
            assert!(bfs.found && astar.found && dfs.found);
            assert_eq!(bfs.path().count(), astar.path().count(), "{text}");
            assert!(bfs.path().count() <= dfs.path().count(), "{text}");
        }
    }

    #[test]
    fn search_does_not_mutate_grid() {
        let g: Grid = MAZE.parse().unwrap();
        let before = g.clone();
        for a in Algorithm::ALL {
            solve(&g, a, |_: StepEvent| {}).unwrap();
        }
        assert_eq!(g, before);
    }

    #[test]
    fn painting_events_marks_the_path() {
        let g: Grid = "S...\n.##.\n...E".parse().unwrap();
        let mut canvas = g.clone();
        let r = solve(&g, Algorithm::Bfs, |e: StepEvent| e.paint(&mut canvas).unwrap()).unwrap();
        assert_eq!(r.steps, 4);
        assert_eq!(canvas.to_string(), "S***\n.##*\n...E");
        assert_eq!(canvas.reset_visualization(), g);
    }

    /// Logs its start on the first poll, returns `Pending`, and logs its end
    /// on the second poll.
    struct Yielding {
        id: usize,
        polled: bool,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Future for Yielding {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
            if self.polled {
                self.log.borrow_mut().push(format!("end {}", self.id));
                Poll::Ready(())
            } else {
                self.polled = true;
                self.log.borrow_mut().push(format!("begin {}", self.id));
                Poll::Pending
            }
        }
    }

    #[test]
    fn async_observer_is_awaited_before_next_event() {
        let g: Grid = "S...E".parse().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut n = 0;
        let result = block_on(search_async(
            &g,
            Algorithm::Bfs,
            Coord::new(0, 0),
            Coord::new(0, 4),
            |e: StepEvent| {
                log.borrow_mut().push(format!("event {}", e.coord));
                n += 1;
                Yielding {
                    id: n,
                    polled: false,
                    log: Rc::clone(&log),
                }
            },
        ))
        .unwrap();
        assert_eq!(result, SearchResult { found: true, steps: 3 });
        assert_eq!(
            *log.borrow(),
            vec![
                "event (0, 1)",
                "begin 1",
                "end 1",
                "event (0, 2)",
                "begin 2",
                "end 2",
                "event (0, 3)",
                "begin 3",
                "end 3",
            ]
        );
    }

    #[test]
    fn async_and_sync_emit_the_same_events() {
        let g: Grid = MAZE.parse().unwrap();
        let t = g.locate_terminals().unwrap();
        let solver = Solver::new(SearchOptions {
            emit_explored: true,
        });
        for a in Algorithm::ALL {
            let mut sync_events = Vec::new();
            solver
                .search(a, &g, t.start, t.end, |e: StepEvent| sync_events.push(e))
                .unwrap();
            let async_events = RefCell::new(Vec::new());
            block_on(solver.search_async(a, &g, t.start, t.end, |e| {
                async_events.borrow_mut().push(e);
                async {}
            }))
            .unwrap();
            assert_eq!(sync_events, async_events.into_inner());
        }
    }
}

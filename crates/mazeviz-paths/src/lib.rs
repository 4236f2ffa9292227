//! Step-emitting graph searches over maze grids.
//!
//! This crate implements three searches on a [`Grid`](mazeviz_core::Grid):
//!
//! - **BFS** shortest path ([`Solver::bfs`])
//! - **DFS** some path, not necessarily shortest ([`Solver::dfs`])
//! - **A\*** shortest path with a Manhattan heuristic ([`Solver::astar`])
//!
//! A search does not touch the grid it is given. It produces a [`Trace`]:
//! the full, ordered list of [`StepEvent`]s (optional `Explored` events in
//! expansion order, then the `PathSegment` events from the cell after the
//! start up to the cell before the end). The trace is complete before the
//! first event reaches an observer, so a caller that stops listening half
//! way simply drops the rest.
//!
//! # Observers
//!
//! | Entry point | Observer |
//! |---|---|
//! | [`search`], [`Solver::search`] | any [`Observer`]: a closure or a `Vec<StepEvent>` |
//! | [`search_async`], [`Solver::search_async`] | `FnMut(StepEvent) -> impl Future`, awaited |
//!
//! [`block_on`] drives the async form without pulling in a runtime.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod executor;
mod observer;
mod solver;
mod state;
mod step;

pub use distance::manhattan;
pub use error::SearchError;
pub use executor::block_on;
pub use observer::Observer;
pub use solver::{
    Algorithm, ParseAlgorithmError, SearchOptions, Solver, search, search_async, solve,
};
pub use state::Trace;
pub use step::{SearchResult, StepEvent, StepKind};

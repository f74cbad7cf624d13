//! Uninformed and informed search over a [`mazegrid_core::Grid`].
//!
//! - **Breadth-first** ([`Solver::breadth_first`]), shortest by link count
//! - **Depth-first** ([`Solver::depth_first`]) with shuffled neighbour order
//! - **Greedy best-first** ([`Solver::greedy`]) guided only by a heuristic
//! - **A\*** ([`Solver::astar`]) with lazy decrease-key
//! - **Reachability** ([`Solver::reachable`], [`Solver::component_count`])
//!
//! Every search resets the grid's search state, writes parent / distance /
//! score into the cells it discovers and marks the resulting path with
//! [`trace_path`]. A [`SearchReport`] summarises the run.

mod astar;
mod bfs;
mod cc;
mod dfs;
mod distance;
mod greedy;
mod path;
mod solver;
mod traits;

pub use distance::{Chebyshev, HeuristicKind, Manhattan, UnknownName, chebyshev, manhattan};
pub use path::trace_path;
pub use solver::{SearchConfig, SearchKind, SearchReport, Solver};
pub use traits::Heuristic;

//! **mazegrid-core**: the grid graph shared by maze generation and search.
//!
//! This crate provides the foundational types used across the *mazegrid*
//! workspace: geometry primitives, the [`Cell`] node with its search
//! bookkeeping, and the [`Grid`] arena whose cells can be linked and
//! unlinked to form mazes.

pub mod cell;
pub mod config;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Mark, by_score};
pub use config::{ConfigError, GridConfig};
pub use geom::{Direction, Point, Range};
pub use grid::Grid;

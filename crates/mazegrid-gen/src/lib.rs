//! Topology generators for mazegrid grids.
//!
//! [`MazeGen`] rewires a [`mazegrid_core::Grid`] into one of four layouts
//! (see [`Topology`]): a randomised spanning maze, a fully open grid, a fixed
//! room layout or a lattice of obstacles. Randomness comes from the `R: Rng`
//! the generator is built with, so seeded generators are reproducible.

mod mapgen;
mod obstacles;
mod rooms;
mod topology;

pub use mapgen::MazeGen;
pub use topology::{Topology, UnknownTopology};

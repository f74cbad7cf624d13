//! Randomised maze generation over a [`Grid`].
//!
//! [`MazeGen`] rewires the adjacency of an existing grid. Every generator
//! first clears all links and finishes by resetting the grid's search state,
//! so a regenerated grid never carries parents or scores from an earlier run.

use mazegrid_core::{Grid, Point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngExt, SeedableRng};

use crate::topology::Topology;

/// Topology generator holding the random source it draws from.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    extra_links: Option<usize>,
    // spanning maze scratch: expanded flags, pending stack, provisional parents
    visited: Vec<bool>,
    stack: Vec<Point>,
    pending: Vec<Option<Point>>,
}

impl MazeGen<StdRng> {
    /// Create a reproducible generator from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            extra_links: None,
            visited: Vec::new(),
            stack: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Override how many random links the spanning maze and the obstacle
    /// field add (builder). Defaults to the larger grid dimension.
    pub fn with_extra_links(mut self, n: usize) -> Self {
        self.extra_links = Some(n);
        self
    }

    /// Number of random links added to a grid of the given size.
    pub fn extra_links(&self, grid: &Grid) -> usize {
        self.extra_links
            .unwrap_or_else(|| grid.width().max(grid.height()) as usize)
    }

    /// Rebuild `grid` with the given topology.
    pub fn generate(&mut self, topology: Topology, grid: &mut Grid) {
        log::info!(
            "generating {topology} on a {}x{} grid",
            grid.width(),
            grid.height()
        );
        match topology {
            Topology::Maze => self.spanning_maze(grid),
            Topology::Open => self.open_grid(grid),
            Topology::Rooms => self.rooms(grid),
            Topology::Obstacles => self.obstacles(grid),
        }
    }

    /// Randomised depth-first spanning tree rooted at the grid's source,
    /// followed by a handful of random extra links that open up loops.
    ///
    /// Each cell is linked to the cell that last pushed it before it was
    /// popped, so without extra links the result is a spanning tree.
    pub fn spanning_maze(&mut self, grid: &mut Grid) {
        grid.reset_topology();
        self.visited.clear();
        self.visited.resize(grid.len(), false);
        self.pending.clear();
        self.pending.resize(grid.len(), None);
        self.stack.clear();
        self.stack.push(grid.source());

        while let Some(cp) = self.stack.pop() {
            let Some(ci) = grid.index(cp) else {
                continue;
            };
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;

            let mut next = grid.possible_neighbors(cp);
            next.retain(|&n| grid.index(n).is_some_and(|i| !self.visited[i]));
            next.shuffle(&mut self.rng);
            for &n in next.iter() {
                if let Some(ni) = grid.index(n) {
                    self.pending[ni] = Some(cp);
                }
            }
            self.stack.extend(next);

            if let Some(parent) = self.pending[ci] {
                grid.link(parent, cp);
            }
        }
        log::debug!("spanning tree with {} links", grid.edge_count());

        let n = self.extra_links(grid);
        self.add_random_links(grid, n);
        grid.reset_search_state();
    }

    /// Perform `n` rounds of: pick a random cell and link it to one of its
    /// unlinked geometric neighbours, if it has any. Returns the number of
    /// links actually added.
    pub fn add_random_links(&mut self, grid: &mut Grid, n: usize) -> usize {
        let mut added = 0;
        for _ in 0..n {
            let p = Point::new(
                self.rng.random_range(0..grid.width()),
                self.rng.random_range(0..grid.height()),
            );
            let mut candidates = grid.possible_neighbors(p);
            candidates.retain(|&q| !grid.is_linked(p, q));
            if candidates.is_empty() {
                continue;
            }
            let q = candidates[self.rng.random_range(0..candidates.len())];
            if grid.link(p, q) {
                added += 1;
            }
        }
        log::trace!("{added} of {n} random links added");
        added
    }

    /// Link every cell to all of its geometric neighbours.
    pub fn open_grid(&mut self, grid: &mut Grid) {
        grid.reset_topology();
        grid.link_all_possible();
        grid.reset_search_state();
    }
}

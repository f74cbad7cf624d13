//! Reachability over the current adjacency.

use mazegrid_core::{Grid, Point};
use rand::Rng;

use crate::Solver;

impl<R: Rng> Solver<R> {
    /// Flood-fill from `from` and return every cell connected to it,
    /// `from` included, in discovery order.
    ///
    /// Only adjacency is read; the grid's search state is left untouched.
    pub fn reachable(&mut self, grid: &Grid, from: Point) -> Vec<Point> {
        self.clear_visited(grid);
        let mut result = Vec::new();
        let Some(si) = grid.index(from) else {
            return result;
        };

        self.stack.clear();
        self.stack.push(from);
        self.visited[si] = true;
        result.push(from);

        while let Some(cp) = self.stack.pop() {
            for &np in grid.neighbors(cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if !self.visited[ni] {
                    self.visited[ni] = true;
                    self.stack.push(np);
                    result.push(np);
                }
            }
        }

        result
    }

    /// Number of connected components of the grid graph. A fully connected
    /// maze has exactly one.
    pub fn component_count(&mut self, grid: &Grid) -> usize {
        self.clear_visited(grid);
        let mut count = 0;

        for start in 0..grid.len() {
            if self.visited[start] {
                continue;
            }
            count += 1;
            self.stack.clear();
            self.stack.push(grid.point(start));
            self.visited[start] = true;

            while let Some(cp) = self.stack.pop() {
                for &np in grid.neighbors(cp) {
                    if let Some(ni) = grid.index(np) {
                        if !self.visited[ni] {
                            self.visited[ni] = true;
                            self.stack.push(np);
                        }
                    }
                }
            }
        }

        log::trace!("{count} component(s) over {} cells", grid.len());
        count
    }

    fn clear_visited(&mut self, grid: &Grid) {
        self.visited.clear();
        self.visited.resize(grid.len(), false);
    }
}

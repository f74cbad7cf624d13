use mazegrid_core::Grid;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::solver::{SearchKind, SearchReport, Solver};

impl<R: Rng> Solver<R> {
    /// Depth-first search from the grid's source to its target.
    ///
    /// Neighbours are shuffled before being pushed so the walk has no
    /// preferred direction. Every expansion re-parents the unexpanded
    /// neighbours it pushes; the path found is rarely the shortest.
    pub fn depth_first(&mut self, grid: &mut Grid) -> SearchReport {
        self.prepare(grid);
        let (source, target) = (grid.source(), grid.target());
        self.stack.push(source);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        while let Some(cp) = self.stack.pop() {
            if cp == target {
                break;
            }
            let Some(ci) = grid.index(cp) else {
                continue;
            };
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            expanded += 1;

            Self::load_neighbors(grid, cp, &mut nbuf);
            nbuf.shuffle(&mut self.rng);
            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                grid.set_parent(np, cp);
                self.stack.push(np);
            }
        }

        self.nbuf = nbuf;
        self.finish(grid, SearchKind::DepthFirst, expanded)
    }
}

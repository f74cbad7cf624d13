use mazegrid_core::Grid;
use rand::Rng;

use crate::solver::{SearchKind, SearchReport, Solver};

impl<R: Rng> Solver<R> {
    /// Breadth-first search from the grid's source to its target.
    ///
    /// Cells are marked visited when first discovered, so each cell keeps the
    /// parent it was discovered from and its distance is the minimum number
    /// of links from the source.
    pub fn breadth_first(&mut self, grid: &mut Grid) -> SearchReport {
        self.prepare(grid);
        let (source, target) = (grid.source(), grid.target());

        if let Some(si) = grid.index(source) {
            self.visited[si] = true;
            self.queue.push_back(source);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        while let Some(cp) = self.queue.pop_front() {
            if cp == target {
                break;
            }
            expanded += 1;

            Self::load_neighbors(grid, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                grid.set_parent(np, cp);
                self.queue.push_back(np);
            }
        }

        self.nbuf = nbuf;
        self.finish(grid, SearchKind::BreadthFirst, expanded)
    }
}

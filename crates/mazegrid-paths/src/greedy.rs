use mazegrid_core::{Cell, Grid};
use rand::Rng;

use crate::solver::{SearchKind, SearchReport, Solver};
use crate::traits::Heuristic;

impl<R: Rng> Solver<R> {
    /// Greedy best-first search: always expand the frontier cell whose
    /// heuristic estimate to the target is smallest.
    ///
    /// Every neighbour that has not been expanded yet takes the expanding
    /// cell as parent and `heuristic(neighbour, target)` as score, and is
    /// pushed again. There is no path-cost term, so the result is not
    /// necessarily the shortest path.
    pub fn greedy<H: Heuristic + ?Sized>(
        &mut self,
        grid: &mut Grid,
        heuristic: &H,
    ) -> SearchReport {
        self.prepare(grid);
        let (source, target) = (grid.source(), grid.target());
        self.push_open(grid, source);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        while let Some(current) = self.open.pop() {
            let cp = current.pos;
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
            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                grid.set_parent(np, cp);
                if let Some(c) = grid.cell_mut(np) {
                    c.set_score(Some(heuristic.estimate(np, target)));
                }
                self.push_open(grid, np);
            }
        }

        self.nbuf = nbuf;
        log::trace!(
            "greedy frontier left with {} entries, target score {:?}",
            self.open.len(),
            grid.cell(target).and_then(Cell::score)
        );
        self.finish(grid, SearchKind::Greedy, expanded)
    }
}

use mazegrid_core::{Cell, Grid};
use rand::Rng;

use crate::solver::{SearchKind, SearchReport, Solver};
use crate::traits::Heuristic;

impl<R: Rng> Solver<R> {
    /// A* search from the grid's source to its target.
    ///
    /// The cost so far (`g`) lives in each cell's distance and the priority
    /// `g + heuristic(cell, target)` in its score. A neighbour is updated when
    /// it was never discovered or when going through the current cell is
    /// strictly cheaper; it is then pushed again and earlier heap entries for
    /// it become stale. With an admissible heuristic the path is a shortest
    /// one.
    pub fn astar<H: Heuristic + ?Sized>(
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
            let Some(ci) = grid.index(cp) else {
                continue;
            };
            // Skip stale entries.
            if grid.cell(cp).and_then(Cell::score) != current.score || self.visited[ci] {
                continue;
            }
            if cp == target {
                break;
            }
            self.visited[ci] = true;
            expanded += 1;

            let Some(g) = grid.cell(cp).and_then(Cell::distance) else {
                continue;
            };
            Self::load_neighbors(grid, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let better = match grid.cell(np) {
                    Some(c) if c.score().is_none() => true,
                    Some(c) => c.distance().is_some_and(|d| g + 1 < d),
                    None => false,
                };
                if !better {
                    continue;
                }
                grid.set_parent(np, cp);
                if let Some(c) = grid.cell_mut(np) {
                    c.set_score(Some(g + 1 + heuristic.estimate(np, target)));
                }
                self.visited[ni] = false;
                self.push_open(grid, np);
            }
        }

        self.nbuf = nbuf;
        self.finish(grid, SearchKind::AStar, expanded)
    }
}

#[cfg(test)]
mod tests {
    use mazegrid_core::{Grid, Point};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{Chebyshev, Manhattan, Solver};

    fn solver() -> Solver<StdRng> {
        Solver::new(StdRng::seed_from_u64(0))
    }

    #[test]
    fn open_grid_shortest_path() {
        let mut g = Grid::with_size(6, 5).unwrap();
        g.link_all_possible();
        let report = solver().astar(&mut g, &Manhattan);
        assert_eq!(report.distance, Some(5 + 4));
        assert_eq!(report.path.len(), 10);
        for w in report.path.windows(2) {
            assert!(g.is_linked(w[0], w[1]));
        }
        assert_eq!(g.path_cells().count(), 8);
    }

    #[test]
    fn scores_are_cost_plus_estimate() {
        let mut g = Grid::with_size(5, 4).unwrap();
        g.link_all_possible();
        g.unlink(Point::new(1, 0), Point::new(2, 0));
        g.unlink(Point::new(1, 1), Point::new(2, 1));
        solver().astar(&mut g, &Manhattan);
        let (s, t) = (g.source(), g.target());
        for c in g.cells().filter(|c| c.position() != s) {
            if let Some(score) = c.score() {
                let d = c.distance().unwrap();
                assert_eq!(score, d + c.position().manhattan(t));
            }
        }
    }

    #[test]
    fn matches_breadth_first_around_walls() {
        let mut g = Grid::with_size(5, 5).unwrap();
        g.link_all_possible();
        // A wall across most of the second row forces a detour east.
        for x in 0..4 {
            g.unlink(Point::new(x, 0), Point::new(x, 1));
        }
        let bfs = solver().breadth_first(&mut g);
        let astar = solver().astar(&mut g, &Manhattan);
        assert_eq!(bfs.distance, Some(8));
        assert_eq!(astar.distance, bfs.distance);
        let cheb = solver().astar(&mut g, &Chebyshev);
        assert_eq!(cheb.distance, bfs.distance);
    }

    #[test]
    fn zero_estimate_is_uniform_cost() {
        let mut g = Grid::with_size(4, 4).unwrap();
        g.link_all_possible();
        let report = solver().astar(&mut g, &|_: Point, _: Point| 0);
        assert_eq!(report.distance, Some(6));
        // Without guidance every cell closer than the target is expanded.
        assert_eq!(report.expanded, 15);
    }

    #[test]
    fn no_path_keeps_partial_state() {
        let mut g = Grid::with_size(4, 4).unwrap();
        g.link_all_possible();
        let t = g.target();
        for n in g.possible_neighbors(t) {
            g.unlink(t, n);
        }
        let report = solver().astar(&mut g, &Manhattan);
        assert!(!report.found());
        assert_eq!(report.expanded, 15);
        let c = g.cell(Point::new(1, 1)).unwrap();
        assert!(c.parent().is_some());
        assert_eq!(c.distance(), Some(2));
        assert_eq!(c.score(), Some(6));
        assert_eq!(g.cell(t).unwrap().score(), None);
    }
}

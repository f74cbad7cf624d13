//! Fixed room layout carved out of an open grid.

use std::ops::Range;

use mazegrid_core::{Grid, Point};
use rand::Rng;

use crate::mapgen::MazeGen;

/// A straight run of walls removed from an open grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WallRun {
    /// Walls between rows `y` and `y + 1` for every column in `xs`.
    Below { y: i32, xs: Range<i32> },
    /// Walls between columns `x` and `x + 1` for every row in `ys`.
    RightOf { x: i32, ys: Range<i32> },
}

impl WallRun {
    fn apply(&self, grid: &mut Grid) {
        match self {
            WallRun::Below { y, xs } => {
                for x in xs.clone() {
                    grid.unlink(Point::new(x, *y), Point::new(x, y + 1));
                }
            }
            WallRun::RightOf { x, ys } => {
                for y in ys.clone() {
                    grid.unlink(Point::new(*x, y), Point::new(x + 1, y));
                }
            }
        }
    }
}

/// The room blueprint for a `w × h` grid. Positions scale with the grid by
/// integer quarters and eighths of each side.
pub(crate) fn blueprint(w: i32, h: i32) -> [WallRun; 12] {
    use WallRun::{Below, RightOf};
    [
        Below { y: h / 4 - 1, xs: w / 4 + 2..w / 2 + 1 },
        RightOf { x: w / 4 - 1, ys: h / 4 + 2..h / 2 + 1 },
        Below { y: h / 2, xs: 0..w / 2 - 1 },
        Below { y: h / 2, xs: w / 2 + 1..w },
        RightOf { x: w / 2, ys: 0..h / 2 - 2 },
        RightOf { x: w / 2, ys: h / 2 + 3..h },
        Below { y: h / 2, xs: 3 * w / 4..w },
        RightOf { x: 3 * w / 4, ys: 0..h / 4 },
        Below { y: 3 * h / 4 - 1, xs: w / 8..3 * w / 4 + 1 },
        RightOf { x: 3 * w / 4, ys: 3 * h / 4..h - 1 },
        RightOf { x: w / 8 - 1, ys: 3 * h / 4..h - 5 },
        RightOf { x: w / 8 - 1, ys: h - 3..h },
    ]
}

impl<R: Rng> MazeGen<R> {
    /// Open grid partitioned into rooms by a fixed blueprint of wall runs.
    ///
    /// Runs that fall outside a small grid are skipped, so every size gets
    /// some subset of the layout.
    pub fn rooms(&mut self, grid: &mut Grid) {
        grid.reset_topology();
        grid.link_all_possible();
        for run in blueprint(grid.width(), grid.height()) {
            run.apply(grid);
        }
        log::debug!("room layout with {} links", grid.edge_count());
        grid.reset_search_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_links(w: i32, h: i32) -> usize {
        ((w - 1) * h + w * (h - 1)) as usize
    }

    /// Adjacent pairs `(a, b)` with `a < b` that are not linked, sorted.
    fn removed_edges(g: &Grid) -> Vec<(Point, Point)> {
        let mut out = Vec::new();
        for p in g.bounds() {
            for n in g.possible_neighbors(p) {
                if p < n && !g.is_linked(p, n) {
                    out.push((p, n));
                }
            }
        }
        out.sort();
        out
    }

    fn edges(list: &[(i32, i32, i32, i32)]) -> Vec<(Point, Point)> {
        list.iter()
            .map(|&(ax, ay, bx, by)| (Point::new(ax, ay), Point::new(bx, by)))
            .collect()
    }

    const REMOVED_10X10: &[(i32, i32, i32, i32)] = &[
        (5, 0, 6, 0), (7, 0, 8, 0), (4, 1, 4, 2), (5, 1, 6, 1), (5, 1, 5, 2),
        (7, 1, 8, 1), (5, 2, 6, 2), (1, 4, 2, 4), (0, 5, 0, 6), (1, 5, 2, 5),
        (1, 5, 1, 6), (2, 5, 2, 6), (3, 5, 3, 6), (6, 5, 6, 6), (7, 5, 7, 6),
        (8, 5, 8, 6), (9, 5, 9, 6), (1, 6, 1, 7), (2, 6, 2, 7), (3, 6, 3, 7),
        (4, 6, 4, 7), (5, 6, 5, 7), (6, 6, 6, 7), (7, 6, 7, 7), (0, 7, 1, 7),
        (7, 7, 8, 7), (0, 8, 1, 8), (5, 8, 6, 8), (7, 8, 8, 8), (0, 9, 1, 9),
        (5, 9, 6, 9),
    ];

    const REMOVED_40X30: &[(i32, i32, i32, i32)] = &[
        (20, 0, 21, 0), (30, 0, 31, 0), (20, 1, 21, 1), (30, 1, 31, 1), (20, 2, 21, 2),
        (30, 2, 31, 2), (20, 3, 21, 3), (30, 3, 31, 3), (20, 4, 21, 4), (30, 4, 31, 4),
        (20, 5, 21, 5), (30, 5, 31, 5), (12, 6, 12, 7), (13, 6, 13, 7), (14, 6, 14, 7),
        (15, 6, 15, 7), (16, 6, 16, 7), (17, 6, 17, 7), (18, 6, 18, 7), (19, 6, 19, 7),
        (20, 6, 21, 6), (20, 6, 20, 7), (30, 6, 31, 6), (20, 7, 21, 7), (20, 8, 21, 8),
        (9, 9, 10, 9), (20, 9, 21, 9), (9, 10, 10, 10), (20, 10, 21, 10), (9, 11, 10, 11),
        (20, 11, 21, 11), (9, 12, 10, 12), (20, 12, 21, 12), (9, 13, 10, 13), (9, 14, 10, 14),
        (0, 15, 0, 16), (1, 15, 1, 16), (2, 15, 2, 16), (3, 15, 3, 16), (4, 15, 4, 16),
        (5, 15, 5, 16), (6, 15, 6, 16), (7, 15, 7, 16), (8, 15, 8, 16), (9, 15, 10, 15),
        (9, 15, 9, 16), (10, 15, 10, 16), (11, 15, 11, 16), (12, 15, 12, 16), (13, 15, 13, 16),
        (14, 15, 14, 16), (15, 15, 15, 16), (16, 15, 16, 16), (17, 15, 17, 16), (18, 15, 18, 16),
        (21, 15, 21, 16), (22, 15, 22, 16), (23, 15, 23, 16), (24, 15, 24, 16), (25, 15, 25, 16),
        (26, 15, 26, 16), (27, 15, 27, 16), (28, 15, 28, 16), (29, 15, 29, 16), (30, 15, 30, 16),
        (31, 15, 31, 16), (32, 15, 32, 16), (33, 15, 33, 16), (34, 15, 34, 16), (35, 15, 35, 16),
        (36, 15, 36, 16), (37, 15, 37, 16), (38, 15, 38, 16), (39, 15, 39, 16), (20, 18, 21, 18),
        (20, 19, 21, 19), (20, 20, 21, 20), (5, 21, 5, 22), (6, 21, 6, 22), (7, 21, 7, 22),
        (8, 21, 8, 22), (9, 21, 9, 22), (10, 21, 10, 22), (11, 21, 11, 22), (12, 21, 12, 22),
        (13, 21, 13, 22), (14, 21, 14, 22), (15, 21, 15, 22), (16, 21, 16, 22), (17, 21, 17, 22),
        (18, 21, 18, 22), (19, 21, 19, 22), (20, 21, 21, 21), (20, 21, 20, 22), (21, 21, 21, 22),
        (22, 21, 22, 22), (23, 21, 23, 22), (24, 21, 24, 22), (25, 21, 25, 22), (26, 21, 26, 22),
        (27, 21, 27, 22), (28, 21, 28, 22), (29, 21, 29, 22), (30, 21, 30, 22), (4, 22, 5, 22),
        (20, 22, 21, 22), (30, 22, 31, 22), (4, 23, 5, 23), (20, 23, 21, 23), (30, 23, 31, 23),
        (4, 24, 5, 24), (20, 24, 21, 24), (30, 24, 31, 24), (20, 25, 21, 25), (30, 25, 31, 25),
        (20, 26, 21, 26), (30, 26, 31, 26), (4, 27, 5, 27), (20, 27, 21, 27), (30, 27, 31, 27),
        (4, 28, 5, 28), (20, 28, 21, 28), (30, 28, 31, 28), (4, 29, 5, 29), (20, 29, 21, 29),
    ];

    #[test]
    fn blueprint_for_ten_by_ten() {
        let runs = blueprint(10, 10);
        assert_eq!(runs[0], WallRun::Below { y: 1, xs: 4..6 });
        assert_eq!(runs[1], WallRun::RightOf { x: 1, ys: 4..6 });
        assert_eq!(runs[8], WallRun::Below { y: 6, xs: 1..8 });
        assert_eq!(runs[11], WallRun::RightOf { x: 0, ys: 7..10 });
    }

    #[test]
    fn ten_by_ten_layout() {
        let mut g = Grid::with_size(10, 10).unwrap();
        MazeGen::from_seed(0).rooms(&mut g);
        // Top wall of the first room.
        assert!(!g.is_linked(Point::new(4, 1), Point::new(4, 2)));
        assert!(g.is_linked(Point::new(3, 1), Point::new(3, 2)));
        // Door in the middle horizontal wall.
        assert!(!g.is_linked(Point::new(3, 5), Point::new(3, 6)));
        assert!(g.is_linked(Point::new(4, 5), Point::new(4, 6)));
        assert!(g.is_linked(Point::new(5, 5), Point::new(5, 6)));
        // Source corner stays connected.
        assert!(g.is_linked(Point::new(0, 0), Point::new(1, 0)));
        assert!(g.edge_count() < open_links(10, 10));
        for c in g.cells() {
            for &n in c.neighbors() {
                assert!(g.is_linked(n, c.position()));
            }
        }
    }

    #[test]
    fn removed_edges_match_blueprint() {
        for (w, h, expected) in [(10, 10, REMOVED_10X10), (40, 30, REMOVED_40X30)] {
            let mut g = Grid::with_size(w, h).unwrap();
            MazeGen::from_seed(0).rooms(&mut g);
            assert_eq!(removed_edges(&g), edges(expected), "{w}x{h}");
            assert_eq!(g.edge_count(), open_links(w, h) - expected.len());
        }
    }

    #[test]
    fn runs_left_of_a_narrow_grid_are_skipped() {
        // On a 2-wide grid the first room's side wall sits at x = -1.
        let mut g = Grid::with_size(2, 10).unwrap();
        MazeGen::from_seed(0).rooms(&mut g);
        assert!(g.is_linked(Point::new(0, 4), Point::new(1, 4)));
        assert!(g.is_linked(Point::new(0, 5), Point::new(1, 5)));
        assert_eq!(
            removed_edges(&g),
            edges(&[(1, 5, 1, 6), (0, 6, 0, 7), (1, 6, 1, 7)])
        );
    }

    #[test]
    fn tiny_grid_does_not_panic() {
        for (w, h) in [(2, 1), (1, 2), (2, 2), (3, 3), (5, 4)] {
            let mut g = Grid::with_size(w, h).unwrap();
            MazeGen::from_seed(0).rooms(&mut g);
            assert!(g.edge_count() <= open_links(w, h));
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let mut a = Grid::with_size(40, 30).unwrap();
        let mut b = Grid::with_size(40, 30).unwrap();
        MazeGen::from_seed(1).rooms(&mut a);
        MazeGen::from_seed(2).rooms(&mut b);
        assert_eq!(a.edge_count(), b.edge_count());
        for (ca, cb) in a.cells().zip(b.cells()) {
            assert_eq!(ca.neighbors(), cb.neighbors());
        }
    }
}

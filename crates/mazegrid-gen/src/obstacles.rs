//! City-block obstacle field: a lattice of boxes with random road blocks.

use mazegrid_core::{Grid, Point};
use rand::{Rng, RngExt};

use crate::mapgen::MazeGen;

/// Distance between consecutive boxes along each axis.
const STRIDE: usize = 5;
/// Largest box side.
const BOX: i32 = 3;

impl<R: Rng> MazeGen<R> {
    /// Open grid with a regular lattice of walled boxes, a few random links
    /// punched back through them and road blocks across the streets.
    pub fn obstacles(&mut self, grid: &mut Grid) {
        grid.reset_topology();
        grid.link_all_possible();
        let (w, h) = (grid.width(), grid.height());

        for n in (1..h).step_by(STRIDE) {
            for m in (1..w).step_by(STRIDE) {
                wall_box(grid, Point::new(m, n), BOX.min(w - m - 1), BOX.min(h - n - 1));
            }
        }

        let extra = self.extra_links(grid);
        self.add_random_links(grid, extra);

        // Vertical blocks: one wall west of a picked column, per street row.
        let cols: Vec<i32> = (3..w).step_by(STRIDE).collect();
        if !cols.is_empty() {
            let mut block = |grid: &mut Grid, y: i32| {
                let x = self.pick(&cols);
                grid.unlink(Point::new(x, y), Point::new(x - 1, y));
                x
            };
            block(grid, 0);
            for m in (4..h - 2).step_by(STRIDE) {
                let x = block(grid, m);
                grid.unlink(Point::new(x, m + 1), Point::new(x - 1, m + 1));
            }
            block(grid, h - 1);
        }

        // Horizontal blocks: one wall north of a picked row, per street column.
        let rows: Vec<i32> = (3..h).step_by(STRIDE).collect();
        if !rows.is_empty() {
            let mut block = |grid: &mut Grid, x: i32| {
                let y = self.pick(&rows);
                grid.unlink(Point::new(x, y), Point::new(x, y - 1));
                y
            };
            block(grid, 0);
            for n in (4..w - 2).step_by(STRIDE) {
                let y = block(grid, n);
                grid.unlink(Point::new(n + 1, y), Point::new(n + 1, y - 1));
            }
            block(grid, w - 1);
        }

        log::debug!("obstacle field with {} links", grid.edge_count());
        grid.reset_search_state();
    }

    fn pick(&mut self, choices: &[i32]) -> i32 {
        choices[self.rng.random_range(0..choices.len())]
    }
}

/// Remove the boundary edges of the `sx × sy` box whose top-left cell is `at`.
fn wall_box(grid: &mut Grid, at: Point, sx: i32, sy: i32) {
    for x in 0..sx {
        let top = at.shift(x, 0);
        grid.unlink(top, top.shift(0, -1));
        let bottom = at.shift(x, sy);
        grid.unlink(bottom, bottom.shift(0, -1));
    }
    for y in 0..sy {
        let left = at.shift(0, y);
        grid.unlink(left, left.shift(-1, 0));
        let right = at.shift(sx, y);
        grid.unlink(right, right.shift(-1, 0));
    }
}

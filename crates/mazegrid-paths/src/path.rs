//! Path reconstruction from parent pointers.

use mazegrid_core::{Cell, Grid, Mark, Point};

/// Walk the parent pointers from the target back to the source, marking every
/// intermediate cell with [`Mark::Path`].
///
/// Returns the path from source to target inclusive, or an empty vector when
/// the target was not reached. The walk is bounded by the number of cells, so
/// a corrupted parent chain cannot loop forever.
pub fn trace_path(grid: &mut Grid) -> Vec<Point> {
    let (source, target) = (grid.source(), grid.target());
    let mut path = vec![target];
    let mut current = grid.cell(target).and_then(Cell::parent);

    for _ in 0..grid.len() {
        let Some(p) = current else {
            return Vec::new();
        };
        if p == source {
            path.push(source);
            path.reverse();
            return path;
        }
        if let Some(c) = grid.cell_mut(p) {
            c.set_mark(Mark::Path);
        }
        path.push(p);
        current = grid.cell(p).and_then(Cell::parent);
    }

    log::warn!("parent chain from {target} does not reach {source}");
    Vec::new()
}

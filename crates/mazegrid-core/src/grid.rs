//! The [`Grid`] type: an arena of [`Cell`]s with mutable 4-neighbour links.
//!
//! Cells are stored row-major and addressed by [`Point`]. Links are always
//! symmetric and only ever join geometrically adjacent cells; every mutation
//! goes through [`Grid::link`] / [`Grid::unlink`] to keep it that way.

use std::fmt;

use crate::cell::{Cell, Mark};
use crate::config::{ConfigError, GridConfig};
use crate::geom::{Point, Range};

/// A fixed-size rectangle of cells plus the current search endpoints.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    source: Point,
    target: Point,
}

impl Grid {
    /// Build a grid from a validated configuration. All cells start unlinked.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds();
        let cells = bounds.iter().map(Cell::new).collect();
        let mut grid = Self {
            cells,
            bounds,
            source: config.source(),
            target: config.target(),
        };
        grid.reset_search_state();
        Ok(grid)
    }

    /// Shorthand for a `width × height` grid with corner endpoints.
    pub fn with_size(width: i32, height: i32) -> Result<Self, ConfigError> {
        Self::new(GridConfig::new(width, height))
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.width() + p.x) as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Linked neighbours of `p` (empty when out of bounds).
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.cell(p) {
            Some(c) => c.neighbors(),
            None => &[],
        }
    }

    /// Geometrically adjacent in-bounds positions, regardless of links, in
    /// the order `x-1`, `x+1`, `y+1`, `y-1`.
    pub fn possible_neighbors(&self, p: Point) -> Vec<Point> {
        [p.shift(-1, 0), p.shift(1, 0), p.shift(0, 1), p.shift(0, -1)]
            .into_iter()
            .filter(|&n| self.bounds.contains(n))
            .collect()
    }

    /// Whether `a` and `b` are linked.
    pub fn is_linked(&self, a: Point, b: Point) -> bool {
        self.cell(a).is_some_and(|c| c.is_linked(b))
    }

    /// Number of undirected links.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(|c| c.neighbors().len()).sum::<usize>() / 2
    }

    // -----------------------------------------------------------------------
    // Topology mutation
    // -----------------------------------------------------------------------

    /// Link two adjacent cells. Non-adjacent, out-of-bounds or already linked
    /// pairs are left alone. Returns whether a link was added.
    pub fn link(&mut self, a: Point, b: Point) -> bool {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return false;
        };
        if a.manhattan(b) != 1 || self.cells[ia].is_linked(b) {
            return false;
        }
        let (ca, cb) = self.pair_mut(ia, ib);
        ca.push_neighbor(b);
        cb.push_neighbor(a);
        true
    }

    /// Remove the link between `a` and `b` on both sides, if present.
    /// Returns whether anything was removed.
    pub fn unlink(&mut self, a: Point, b: Point) -> bool {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return false;
        };
        if ia == ib {
            return false;
        }
        let (ca, cb) = self.pair_mut(ia, ib);
        let removed_a = ca.remove_neighbor(b);
        let removed_b = cb.remove_neighbor(a);
        removed_a || removed_b
    }

    /// Link every cell to all of its geometric neighbours. On an unlinked
    /// grid each neighbour list ends up in [`possible_neighbors`] order.
    ///
    /// [`possible_neighbors`]: Self::possible_neighbors
    pub fn link_all_possible(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.point(i);
            // Both sides of every pair get pushed, so links stay symmetric.
            for n in self.possible_neighbors(p) {
                self.cells[i].push_neighbor(n);
            }
        }
    }

    /// Remove every link, then reset the search state.
    pub fn reset_topology(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_neighbors();
        }
        self.reset_search_state();
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Clear parent, distance, score and marks on every cell, then seed the
    /// source as the zero-distance, zero-score root and flag the target.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_state();
        }
        let (source, target) = (self.source, self.target);
        if let Some(c) = self.cell_mut(source) {
            c.set_distance(Some(0));
            c.set_score(Some(0));
            c.set_mark(Mark::Source);
        }
        if let Some(c) = self.cell_mut(target) {
            c.set_mark(Mark::Target);
        }
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Move the source. Positions outside the grid or equal to the target
    /// are ignored. Returns whether the source changed.
    pub fn set_source(&mut self, p: Point) -> bool {
        if !self.contains(p) || p == self.target {
            log::debug!("ignoring source {p}");
            return false;
        }
        self.source = p;
        self.reset_search_state();
        true
    }

    /// Move the target. Positions outside the grid or equal to the source
    /// are ignored. Returns whether the target changed.
    pub fn set_target(&mut self, p: Point) -> bool {
        if !self.contains(p) || p == self.source {
            log::debug!("ignoring target {p}");
            return false;
        }
        self.target = p;
        self.reset_search_state();
        true
    }

    /// Record `parent` as the cell `p` was reached from (see
    /// [`Cell::set_parent`]). Returns `false` if either is out of bounds.
    pub fn set_parent(&mut self, p: Point, parent: Point) -> bool {
        let (Some(ic), Some(ip)) = (self.index(p), self.index(parent)) else {
            return false;
        };
        if ic == ip {
            return false;
        }
        let (child, parent) = self.pair_mut(ic, ip);
        child.set_parent(parent);
        true
    }

    /// Cells currently marked as lying on the highlighted path.
    pub fn path_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_on_path())
            .map(Cell::position)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Mutable access to two distinct cells at once.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Cell, &mut Cell) {
        debug_assert_ne!(a, b);
        if a < b {
            let (lo, hi) = self.cells.split_at_mut(b);
            (&mut lo[a], &mut hi[0])
        } else {
            let (lo, hi) = self.cells.split_at_mut(a);
            (&mut hi[0], &mut lo[b])
        }
    }

    fn glyph(c: &Cell) -> char {
        match c.mark() {
            Mark::Source => 'S',
            Mark::Target => 'T',
            Mark::Path => '*',
            Mark::Plain if c.parent().is_some() => '.',
            Mark::Plain => ' ',
        }
    }
}

impl fmt::Display for Grid {
    /// ASCII picture: `+---+` walls, `S`/`T` endpoints, `*` path, `.` reached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width(), self.height());
        write!(f, "+")?;
        for _ in 0..w {
            write!(f, "---+")?;
        }
        writeln!(f)?;
        for y in 0..h {
            write!(f, "|")?;
            for x in 0..w {
                let p = Point::new(x, y);
                let c = &self.cells[(y * w + x) as usize];
                let east = if c.is_linked(p.shift(1, 0)) { ' ' } else { '|' };
                write!(f, " {} {}", Self::glyph(c), east)?;
            }
            writeln!(f)?;
            write!(f, "+")?;
            for x in 0..w {
                let p = Point::new(x, y);
                let south = if self.is_linked(p, p.shift(0, 1)) {
                    "   "
                } else {
                    "---"
                };
                write!(f, "{south}+")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

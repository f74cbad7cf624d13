//! The [`Cell`] type, one node of the grid graph with its search bookkeeping.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::{Direction, Point};

/// Presentation flag carried by a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Nothing to highlight.
    #[default]
    Plain,
    /// The search source.
    Source,
    /// The search target.
    Target,
    /// An intermediate cell on the last reconstructed path.
    Path,
}

/// A grid cell.
///
/// Neighbours and the parent are stored as positions into the owning
/// [`Grid`](crate::Grid), never as references. Equality and hashing only
/// look at the position.
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    neighbors: Vec<Point>,
    parent: Option<Point>,
    distance: Option<i32>,
    score: Option<i32>,
    mark: Mark,
}

impl Cell {
    /// A fresh, unlinked and unvisited cell at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbors: Vec::with_capacity(4),
            parent: None,
            distance: None,
            score: None,
            mark: Mark::Plain,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Linked neighbours, in the order the links were made.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    #[inline]
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    #[inline]
    pub fn distance(&self) -> Option<i32> {
        self.distance
    }

    #[inline]
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether the cell lies on the last highlighted path.
    #[inline]
    pub fn is_on_path(&self) -> bool {
        self.mark == Mark::Path
    }

    /// Whether `p` is linked to this cell.
    #[inline]
    pub fn is_linked(&self, p: Point) -> bool {
        self.neighbors.contains(&p)
    }

    /// Clear this cell's own adjacency list. The other side of each link is
    /// left untouched; use [`Grid::reset_topology`](crate::Grid::reset_topology)
    /// to clear the whole graph.
    pub(crate) fn reset_neighbors(&mut self) {
        self.neighbors.clear();
    }

    pub(crate) fn push_neighbor(&mut self, p: Point) {
        if !self.neighbors.contains(&p) {
            self.neighbors.push(p);
        }
    }

    pub(crate) fn remove_neighbor(&mut self, p: Point) -> bool {
        match self.neighbors.iter().position(|&n| n == p) {
            Some(i) => {
                self.neighbors.remove(i);
                true
            }
            None => false,
        }
    }

    /// Forget parent, distance and score and drop any highlight.
    pub fn reset_state(&mut self) {
        self.parent = None;
        self.distance = None;
        self.score = None;
        self.mark = Mark::Plain;
    }

    /// Record `parent` as the cell this one was reached from.
    ///
    /// When the parent's distance is known the distance becomes
    /// `parent.distance + 1`; otherwise it is left as it was.
    pub fn set_parent(&mut self, parent: &Cell) {
        self.parent = Some(parent.pos);
        if let Some(d) = parent.distance {
            self.distance = Some(d + 1);
        }
    }

    #[inline]
    pub fn set_distance(&mut self, distance: Option<i32>) {
        self.distance = distance;
    }

    #[inline]
    pub fn set_score(&mut self, score: Option<i32>) {
        self.score = score;
    }

    #[inline]
    pub fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    /// Manhattan distance between the two positions.
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        self.pos.manhattan(other.pos)
    }

    /// Chebyshev distance between the two positions.
    #[inline]
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        self.pos.chebyshev(other.pos)
    }

    /// Vector `(dx, dy)` from this cell to `other`.
    #[inline]
    pub fn direction_to(&self, other: &Cell) -> Point {
        other.pos - self.pos
    }

    /// Compass directions in which this cell is linked.
    pub fn open_directions(&self) -> Vec<Direction> {
        self.neighbors
            .iter()
            .filter_map(|&n| Direction::from_delta(n - self.pos))
            .collect()
    }

    /// Compass directions in which this cell has a wall (no link).
    pub fn walls(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.neighbors.contains(&(self.pos + d.delta())))
            .collect()
    }

    /// Whether this cell should be expanded before `other`: it has a score
    /// and `other` either has none or a strictly greater one.
    #[inline]
    pub fn precedes(&self, other: &Cell) -> bool {
        by_score(self.score, other.score) == Ordering::Less
    }
}

/// Frontier ordering of two optional scores: any defined score comes before
/// an undefined one, and two undefined scores are equivalent.
pub fn by_score(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.score {
            Some(s) => write!(f, "[{}, {}]", self.pos, s),
            None => write!(f, "[{}, -]", self.pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn set_parent_propagates_known_distance() {
        let mut parent = Cell::new(Point::new(0, 0));
        parent.set_distance(Some(3));
        let mut child = Cell::new(Point::new(1, 0));
        child.set_parent(&parent);
        assert_eq!(child.parent(), Some(Point::new(0, 0)));
        assert_eq!(child.distance(), Some(4));
    }

    #[test]
    fn set_parent_with_unknown_distance_keeps_distance() {
        let parent = Cell::new(Point::new(0, 0));
        let mut child = Cell::new(Point::new(1, 0));
        child.set_parent(&parent);
        assert_eq!(child.parent(), Some(Point::new(0, 0)));
        assert_eq!(child.distance(), None);
        assert!(child.neighbors().is_empty());
    }

    #[test]
    fn reset_state_clears_bookkeeping() {
        let mut c = Cell::new(Point::new(2, 2));
        c.push_neighbor(Point::new(2, 3));
        c.set_distance(Some(1));
        c.set_score(Some(7));
        c.set_mark(Mark::Path);
        c.reset_state();
        assert_eq!(c.distance(), None);
        assert_eq!(c.score(), None);
        assert_eq!(c.parent(), None);
        assert_eq!(c.mark(), Mark::Plain);
        // Adjacency is not search state.
        assert_eq!(c.neighbors(), &[Point::new(2, 3)]);
    }

    #[test]
    fn neighbor_list_is_a_set() {
        let mut c = Cell::new(Point::new(1, 1));
        c.push_neighbor(Point::new(1, 0));
        c.push_neighbor(Point::new(1, 0));
        c.push_neighbor(Point::new(2, 1));
        assert_eq!(c.neighbors().len(), 2);
        assert!(c.remove_neighbor(Point::new(1, 0)));
        assert!(!c.remove_neighbor(Point::new(1, 0)));
        c.reset_neighbors();
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn distances_and_direction() {
        let a = Cell::new(Point::new(1, 1));
        let b = Cell::new(Point::new(3, 4));
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(a.chebyshev_distance(&b), 3);
        assert_eq!(a.direction_to(&b), Point::new(2, 3));
        assert_eq!(b.direction_to(&a), Point::new(-2, -3));
    }

    #[test]
    fn walls_and_open_directions() {
        let mut c = Cell::new(Point::new(1, 1));
        c.push_neighbor(Point::new(2, 1));
        c.push_neighbor(Point::new(1, 0));
        assert_eq!(c.open_directions(), vec![Direction::East, Direction::North]);
        assert_eq!(c.walls(), vec![Direction::South, Direction::West]);
    }

    #[test]
    fn score_ordering() {
        let mut a = Cell::new(Point::new(0, 0));
        let mut b = Cell::new(Point::new(1, 0));
        // Two unset scores: neither precedes.
        assert!(!a.precedes(&b));
        assert!(!b.precedes(&a));

        a.set_score(Some(5));
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));

        b.set_score(Some(5));
        assert!(!a.precedes(&b));
        b.set_score(Some(6));
        assert!(a.precedes(&b));
        assert_eq!(by_score(None, Some(0)), Ordering::Greater);
    }

    #[test]
    fn identity_is_position() {
        let mut a = Cell::new(Point::new(4, 2));
        let b = Cell::new(Point::new(4, 2));
        a.set_score(Some(1));
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(b, Cell::new(Point::new(2, 4)));
    }

    #[test]
    fn display_shows_position_and_score() {
        let mut c = Cell::new(Point::new(3, 1));
        assert_eq!(c.to_string(), "[(3, 1), -]");
        c.set_score(Some(9));
        assert_eq!(c.to_string(), "[(3, 1), 9]");
    }
}

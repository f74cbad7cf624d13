use mazegrid_core::Point;

/// Estimate of the remaining distance between two cells, used to order the
/// frontier of greedy and A* searches.
pub trait Heuristic {
    /// Estimated cost of going from `from` to `to`. A* only guarantees
    /// optimal paths when this never overestimates.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> i32,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self(from, to)
    }
}

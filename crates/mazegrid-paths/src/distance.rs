use std::fmt;
use std::str::FromStr;

use mazegrid_core::Point;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    a.manhattan(b)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    a.chebyshev(b)
}

/// Manhattan heuristic; admissible and consistent on a 4-connected
/// unit-cost grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Chebyshev heuristic; admissible but weaker than [`Manhattan`] on a
/// 4-connected grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        chebyshev(from, to)
    }
}

/// Heuristic selection for configuration and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Chebyshev,
}

impl Heuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self {
            HeuristicKind::Manhattan => manhattan(from, to),
            HeuristicKind::Chebyshev => chebyshev(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Manhattan => f.write_str("manhattan"),
            HeuristicKind::Chebyshev => f.write_str("chebyshev"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(HeuristicKind::Manhattan),
            "chebyshev" | "null" | "linf" => Ok(HeuristicKind::Chebyshev),
            _ => Err(UnknownName {
                what: "heuristic",
                name: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing a search or heuristic name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: \u{201c}{}\u{201d}", self.what, self.name)
    }
}

impl std::error::Error for UnknownName {}

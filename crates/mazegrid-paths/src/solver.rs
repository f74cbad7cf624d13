use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

use mazegrid_core::{Grid, Point, by_score};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::distance::{HeuristicKind, UnknownName};
use crate::path::trace_path;

// ---------------------------------------------------------------------------
// Search kinds and reports
// ---------------------------------------------------------------------------

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    BreadthFirst,
    DepthFirst,
    Greedy,
    AStar,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::BreadthFirst,
        SearchKind::DepthFirst,
        SearchKind::Greedy,
        SearchKind::AStar,
    ];

    /// Whether the algorithm always returns a shortest path.
    pub fn is_optimal(self) -> bool {
        matches!(self, SearchKind::BreadthFirst | SearchKind::AStar)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchKind::BreadthFirst => "breadth-first",
            SearchKind::DepthFirst => "depth-first",
            SearchKind::Greedy => "greedy",
            SearchKind::AStar => "a*",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth" => Ok(SearchKind::BreadthFirst),
            "dfs" | "depth-first" | "depth" => Ok(SearchKind::DepthFirst),
            "greedy" | "best-first" => Ok(SearchKind::Greedy),
            "astar" | "a*" | "a-star" => Ok(SearchKind::AStar),
            _ => Err(UnknownName {
                what: "search",
                name: s.to_string(),
            }),
        }
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub kind: SearchKind,
    /// Number of cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Path length to the target, `None` when it was not reached.
    pub distance: Option<i32>,
    /// Positions from source to target inclusive; empty when not found.
    pub path: Vec<Point>,
}

impl SearchReport {
    #[inline]
    pub fn found(&self) -> bool {
        self.distance.is_some()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(d) => write!(
                f,
                "{}: path length {d}, {} cells expanded",
                self.kind, self.expanded
            ),
            None => write!(
                f,
                "{}: no path, {} cells expanded",
                self.kind, self.expanded
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry for greedy / A*, ordered by score then insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) score: Option<i32>,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the best score first, and
        // among equal scores the earliest pushed.
        by_score(other.score, self.score).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters for building a [`Solver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Heuristic used by greedy and A* when run through [`Solver::run`].
    pub heuristic: HeuristicKind,
    /// Seed for the depth-first shuffle. A random seed is drawn when absent.
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`], writing parent / distance / score into its
/// cells.
///
/// `Solver` owns its frontier containers and visited bitmap so that repeated
/// searches reuse the same allocations.
pub struct Solver<R: Rng> {
    pub(crate) rng: R,
    pub(crate) heuristic: HeuristicKind,
    pub(crate) visited: Vec<bool>,
    pub(crate) queue: VecDeque<Point>,
    pub(crate) stack: Vec<Point>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Solver<StdRng> {
    /// Build a solver from configuration, seeding a [`StdRng`].
    pub fn from_config(config: &SearchConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("search seed {seed}");
        Self::new(StdRng::seed_from_u64(seed)).with_heuristic(config.heuristic)
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver drawing depth-first shuffles from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            heuristic: HeuristicKind::default(),
            visited: Vec::new(),
            queue: VecDeque::new(),
            stack: Vec::new(),
            open: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Set the heuristic used by [`run`](Self::run) (builder).
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    /// Run the search of the given kind.
    pub fn run(&mut self, kind: SearchKind, grid: &mut Grid) -> SearchReport {
        let h = self.heuristic;
        match kind {
            SearchKind::BreadthFirst => self.breadth_first(grid),
            SearchKind::DepthFirst => self.depth_first(grid),
            SearchKind::Greedy => self.greedy(grid, &h),
            SearchKind::AStar => self.astar(grid, &h),
        }
    }

    /// Reset the grid's search state and all scratch containers.
    pub(crate) fn prepare(&mut self, grid: &mut Grid) {
        grid.reset_search_state();
        self.visited.clear();
        self.visited.resize(grid.len(), false);
        self.queue.clear();
        self.stack.clear();
        self.open.clear();
        self.seq = 0;
    }

    /// Push `p` on the priority frontier with its current score.
    pub(crate) fn push_open(&mut self, grid: &Grid, p: Point) {
        let score = grid.cell(p).and_then(|c| c.score());
        self.open.push(NodeRef {
            pos: p,
            score,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Copy the linked neighbours of `p` into `buf`.
    pub(crate) fn load_neighbors(grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        buf.extend_from_slice(grid.neighbors(p));
    }

    /// Reconstruct the path and build the report.
    pub(crate) fn finish(
        &self,
        grid: &mut Grid,
        kind: SearchKind,
        expanded: usize,
    ) -> SearchReport {
        let path = trace_path(grid);
        let distance = grid.cell(grid.target()).and_then(|c| c.distance());
        let report = SearchReport {
            kind,
            expanded,
            distance,
            path,
        };
        log::debug!("{report}");
        report
    }
}

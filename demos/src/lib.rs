//! Command-driven maze session shared by the `mazegrid` binary and tests.
//!
//! A [`Session`] owns one grid plus the generator and solver that act on it.
//! Text commands are parsed into [`Command`]s and applied with
//! [`Session::update`]:
//!
//! | key | action |
//! |---|---|
//! | `m` / `o` / `r` / `n` | regenerate as maze / obstacles / rooms / open grid |
//! | `s X Y` / `t X Y` | move the source / target |
//! | `b` / `d` / `g` / `a` | breadth-first / depth-first / greedy / A* search |
//! | `p` | print the grid |
//! | `q` | quit |

pub mod logging;

use std::fmt;
use std::str::FromStr;

use mazegrid_core::{ConfigError, Grid, GridConfig, Point};
use mazegrid_gen::{MazeGen, Topology};
use mazegrid_paths::{SearchConfig, SearchKind, SearchReport, Solver};
use rand::RngExt;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate(Topology),
    SetSource(Point),
    SetTarget(Point),
    Search(SearchKind),
    Print,
    Quit,
}

/// Error returned when a command line cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing but whitespace.
    Empty,
    /// The first word is not a known key.
    UnknownKey(String),
    /// `s` / `t` given fewer than two coordinates.
    MissingCoordinate(char),
    /// A coordinate that is not an integer.
    BadCoordinate(String),
    /// Extra words after a complete command.
    TrailingInput(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "command: empty input"),
            CommandError::UnknownKey(k) => write!(f, "command: unknown key “{k}”"),
            CommandError::MissingCoordinate(k) => {
                write!(f, "command: “{k}” needs two coordinates, e.g. “{k} 3 4”")
            }
            CommandError::BadCoordinate(s) => write!(f, "command: invalid coordinate “{s}”"),
            CommandError::TrailingInput(s) => write!(f, "command: unexpected “{s}”"),
        }
    }
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(key) = words.next() else {
            return Err(CommandError::Empty);
        };
        let cmd = match key {
            "m" => Command::Generate(Topology::Maze),
            "o" => Command::Generate(Topology::Obstacles),
            "r" => Command::Generate(Topology::Rooms),
            "n" => Command::Generate(Topology::Open),
            "s" => Command::SetSource(parse_point('s', &mut words)?),
            "t" => Command::SetTarget(parse_point('t', &mut words)?),
            "b" => Command::Search(SearchKind::BreadthFirst),
            "d" => Command::Search(SearchKind::DepthFirst),
            "g" => Command::Search(SearchKind::Greedy),
            "a" => Command::Search(SearchKind::AStar),
            "p" => Command::Print,
            "q" => Command::Quit,
            _ => return Err(CommandError::UnknownKey(key.to_string())),
        };
        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(cmd),
        }
    }
}

fn parse_point<'a>(
    key: char,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Point, CommandError> {
    let mut coord = || -> Result<i32, CommandError> {
        let w = words.next().ok_or(CommandError::MissingCoordinate(key))?;
        w.parse()
            .map_err(|_| CommandError::BadCoordinate(w.to_string()))
    };
    let x = coord()?;
    let y = coord()?;
    Ok(Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Settings for a new [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid: GridConfig,
    pub topology: Topology,
    pub search: SearchConfig,
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show this text to the user.
    Show(String),
    /// Stop the session.
    End,
}

pub struct Session {
    grid: Grid,
    mazegen: MazeGen<StdRng>,
    solver: Solver<StdRng>,
    last: Option<SearchReport>,
}

impl Session {
    /// Build the grid and generate its initial topology. Generator and solver
    /// share the configured seed; a random one is drawn and logged if unset.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let mut grid = Grid::new(config.grid)?;
        let seed = config.search.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("session seed {seed}");
        let mut mazegen = MazeGen::from_seed(seed);
        let solver = Solver::from_config(&SearchConfig {
            seed: Some(seed),
            ..config.search
        });
        mazegen.generate(config.topology, &mut grid);
        Ok(Self {
            grid,
            mazegen,
            solver,
            last: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Report of the most recent search since the last grid change.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last.as_ref()
    }

    /// Run one search and return its report.
    pub fn search(&mut self, kind: SearchKind) -> &SearchReport {
        let report = self.solver.run(kind, &mut self.grid);
        log::info!("{report}");
        self.last.insert(report)
    }

    pub fn update(&mut self, cmd: Command) -> Option<Effect> {
        match cmd {
            Command::Generate(topology) => {
                self.mazegen.generate(topology, &mut self.grid);
                self.last = None;
                None
            }
            Command::SetSource(p) => {
                if self.grid.set_source(p) {
                    self.last = None;
                    None
                } else {
                    Some(Effect::Show(format!("cannot move source to {p}")))
                }
            }
            Command::SetTarget(p) => {
                if self.grid.set_target(p) {
                    self.last = None;
                    None
                } else {
                    Some(Effect::Show(format!("cannot move target to {p}")))
                }
            }
            Command::Search(kind) => Some(Effect::Show(self.search(kind).to_string())),
            Command::Print => Some(Effect::Show(self.grid.to_string())),
            Command::Quit => Some(Effect::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(w: i32, h: i32, topology: Topology) -> Session {
        Session::new(SessionConfig {
            grid: GridConfig::new(w, h),
            topology,
            search: SearchConfig {
                seed: Some(17),
                ..SearchConfig::default()
            },
        })
        .unwrap()
    }

    #[test]
    fn parse_keys() {
        assert_eq!("m".parse::<Command>(), Ok(Command::Generate(Topology::Maze)));
        assert_eq!(" o ".parse::<Command>(), Ok(Command::Generate(Topology::Obstacles)));
        assert_eq!("a".parse::<Command>(), Ok(Command::Search(SearchKind::AStar)));
        assert_eq!("s 3 4".parse::<Command>(), Ok(Command::SetSource(Point::new(3, 4))));
        assert_eq!("t 0 -1".parse::<Command>(), Ok(Command::SetTarget(Point::new(0, -1))));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "x".parse::<Command>(),
            Err(CommandError::UnknownKey("x".into()))
        );
        assert_eq!(
            "t 5".parse::<Command>(),
            Err(CommandError::MissingCoordinate('t'))
        );
        assert_eq!(
            "s a 1".parse::<Command>(),
            Err(CommandError::BadCoordinate("a".into()))
        );
        assert_eq!(
            "b now".parse::<Command>(),
            Err(CommandError::TrailingInput("now".into()))
        );
    }

    #[test]
    fn search_reports_are_shown() {
        let mut s = session(8, 6, Topology::Open);
        let Some(Effect::Show(text)) = s.update(Command::Search(SearchKind::BreadthFirst)) else {
            panic!("expected a report");
        };
        assert_eq!(text, "breadth-first: path length 12, 47 cells expanded");
        assert_eq!(s.last_report().and_then(|r| r.distance), Some(12));
    }

    #[test]
    fn regenerating_drops_the_last_report() {
        let mut s = session(10, 10, Topology::Maze);
        s.search(SearchKind::AStar);
        assert!(s.last_report().is_some());
        assert_eq!(s.update(Command::Generate(Topology::Rooms)), None);
        assert!(s.last_report().is_none());
        assert_eq!(s.grid().path_cells().count(), 0);
    }

    #[test]
    fn rejected_endpoints_are_reported() {
        let mut s = session(5, 5, Topology::Open);
        let t = s.grid().target();
        assert_eq!(
            s.update(Command::SetSource(t)),
            Some(Effect::Show(format!("cannot move source to {t}")))
        );
        assert!(matches!(
            s.update(Command::SetTarget(Point::new(9, 9))),
            Some(Effect::Show(_))
        ));
        assert_eq!(s.update(Command::SetTarget(Point::new(2, 2))), None);
        assert_eq!(s.grid().target(), Point::new(2, 2));
    }

    #[test]
    fn print_and_quit() {
        let mut s = session(3, 2, Topology::Open);
        let Some(Effect::Show(text)) = s.update(Command::Print) else {
            panic!("expected the grid");
        };
        assert_eq!(text.lines().count(), 2 * 2 + 1);
        assert!(text.contains('S'));
        assert_eq!(s.update(Command::Quit), Some(Effect::End));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SessionConfig {
            grid: GridConfig::new(0, 4),
            ..SessionConfig::default()
        };
        assert!(matches!(
            Session::new(cfg),
            Err(ConfigError::InvalidSize { .. })
        ));
    }
}

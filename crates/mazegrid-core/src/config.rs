//! Grid construction parameters and their validation.

use std::fmt;

use crate::geom::{Point, Range};

/// Default number of columns (an 800 px window at 20 px per cell).
pub const DEFAULT_WIDTH: i32 = 40;
/// Default number of rows (a 600 px window at 20 px per cell).
pub const DEFAULT_HEIGHT: i32 = 30;

/// Parameters for building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Search source. Defaults to the top-left corner.
    pub source: Option<Point>,
    /// Search target. Defaults to the bottom-right corner.
    pub target: Option<Point>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            source: None,
            target: None,
        }
    }
}

impl GridConfig {
    /// A configuration of the given size with default endpoints.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the source (builder).
    pub fn with_source(mut self, p: Point) -> Self {
        self.source = Some(p);
        self
    }

    /// Set the target (builder).
    pub fn with_target(mut self, p: Point) -> Self {
        self.target = Some(p);
        self
    }

    /// The grid rectangle described by this configuration.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width.max(0), self.height.max(0))
    }

    /// Effective source position.
    pub fn source(&self) -> Point {
        self.source.unwrap_or(Point::ZERO)
    }

    /// Effective target position.
    pub fn target(&self) -> Point {
        self.target
            .unwrap_or(Point::new(self.width - 1, self.height - 1))
    }

    /// Check that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.bounds().len() < 2 {
            return Err(ConfigError::TooSmall);
        }
        let bounds = self.bounds();
        let (source, target) = (self.source(), self.target());
        if !bounds.contains(source) {
            return Err(ConfigError::OutOfBounds {
                endpoint: "source",
                pos: source,
            });
        }
        if !bounds.contains(target) {
            return Err(ConfigError::OutOfBounds {
                endpoint: "target",
                pos: target,
            });
        }
        if source == target {
            return Err(ConfigError::SameEndpoints(source));
        }
        Ok(())
    }
}

/// Errors that can occur when validating a [`GridConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// The grid cannot hold two distinct endpoints.
    TooSmall,
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: &'static str, pos: Point },
    /// Source and target coincide.
    SameEndpoints(Point),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid: invalid size {width}x{height}")
            }
            Self::TooSmall => write!(f, "grid: need at least two cells"),
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "grid: {endpoint} {pos} is out of bounds")
            }
            Self::SameEndpoints(p) => write!(f, "grid: source and target are both {p}"),
        }
    }
}

impl std::error::Error for ConfigError {}

use std::fmt;
use std::str::FromStr;

/// The grid layouts [`MazeGen::generate`](crate::MazeGen::generate) can build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Randomised spanning tree plus a few loops.
    #[default]
    Maze,
    /// Every cell linked to all its neighbours.
    Open,
    /// Fixed room layout.
    Rooms,
    /// Box lattice with random road blocks.
    Obstacles,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Maze,
        Topology::Open,
        Topology::Rooms,
        Topology::Obstacles,
    ];
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topology::Maze => "maze",
            Topology::Open => "open",
            Topology::Rooms => "rooms",
            Topology::Obstacles => "obstacles",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown topology name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopology(pub String);

impl fmt::Display for UnknownTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topology: “{}”", self.0)
    }
}

impl std::error::Error for UnknownTopology {}

impl FromStr for Topology {
    type Err = UnknownTopology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maze" | "m" => Ok(Topology::Maze),
            "open" | "n" => Ok(Topology::Open),
            "rooms" | "room" | "r" => Ok(Topology::Rooms),
            "obstacles" | "obstacle" | "o" => Ok(Topology::Obstacles),
            _ => Err(UnknownTopology(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn topology_round_trip() {
        let json = serde_json::to_string(&Topology::Obstacles).unwrap();
        let back: Topology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Topology::Obstacles);
    }
}

use core::fmt;
use grid_util::point::Point;

/// The state of a single grid cell.
///
/// [Wall](TileType::Wall) is impassable. [Visited](TileType::Visited) and
/// [Path](TileType::Path) are search annotations and only ever replace
/// [Empty](TileType::Empty) tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileType {
    Wall,
    #[default]
    Empty,
    Source,
    Destination,
    Visited,
    Path,
}

impl TileType {
    /// Whether a search may step onto a tile of this type.
    pub fn passable(self) -> bool {
        self != TileType::Wall
    }

    /// Whether this is a transient annotation left behind by a search.
    pub fn is_marking(self) -> bool {
        matches!(self, TileType::Visited | TileType::Path)
    }

    pub fn symbol(self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Empty => '.',
            TileType::Source => 'S',
            TileType::Destination => 'G',
            TileType::Visited => 'o',
            TileType::Path => '*',
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One entry of the visitor log: a tile that changed to `tile` during a search
/// or while carving a maze. Replaying the log in order reproduces the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub point: Point,
    pub tile: TileType,
}

impl Visit {
    pub fn new(point: Point, tile: TileType) -> Visit {
        Visit { point, tile }
    }
}

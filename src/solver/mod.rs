use core::fmt;
use fxhash::FxHashMap;
use grid_util::point::Point;
use log::{debug, info, warn};
use rand::Rng;

use crate::error::Result;
use crate::grid::Grid;
use crate::tile::TileType;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use astar::{astar, AstarSolver};
pub use bfs::{bfs, BfsSolver};
pub use dfs::{dfs, DfsSolver};
pub use dijkstra::{dijkstra, DijkstraSolver};

/// Terminal state of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The destination was reached. Holds the path from source to destination inclusive.
    Found(Vec<Point>),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

impl From<Option<Vec<Point>>> for SearchOutcome {
    fn from(path: Option<Vec<Point>>) -> Self {
        path.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Explores `grid` from `source` until `destination` is reached, marking explored tiles
    /// [Visited](TileType::Visited) and the discovered path [Path](TileType::Path).
    /// Returns the path from source to destination inclusive. Both points must lie in the
    /// grid; [find_path](Self::find_path) checks this first.
    fn search(&mut self, grid: &mut Grid, source: Point, destination: Point)
        -> Option<Vec<Point>>;

    /// [search](Self::search) between arbitrary points, regardless of the grid's own source
    /// and destination tiles. Fails with [OutOfBounds](crate::GridError::OutOfBounds) before
    /// touching the grid if either point lies outside it.
    fn find_path(
        &mut self,
        grid: &mut Grid,
        source: Point,
        destination: Point,
    ) -> Result<Option<Vec<Point>>> {
        grid.get_tile_point(source)?;
        grid.get_tile_point(destination)?;
        Ok(self.search(grid, source, destination))
    }

    /// Runs the search on the source and destination stored in the grid. Without both the
    /// grid is left untouched and [SearchOutcome::NotFound] is returned. Otherwise markings
    /// and the visitor log of a previous search are cleared first.
    fn solve(&mut self, grid: &mut Grid) -> SearchOutcome {
        let (Some(source), Some(destination)) = (grid.source(), grid.destination()) else {
            warn!("Cannot run {} without source and destination", self.name());
            return SearchOutcome::NotFound;
        };
        grid.clear_markings();
        grid.clear_visitor_log();
        info!("Running {} from {} to {}", self.name(), source, destination);
        let outcome = SearchOutcome::from(self.search(grid, source, destination));
        debug!(
            "{} visited {} tiles, path length {:?}",
            self.name(),
            grid.count(TileType::Visited) + grid.count(TileType::Path),
            outcome.path().map(|p| p.len())
        );
        outcome
    }
}

/// Marks every tile of `path` strictly between its endpoints as [Path](TileType::Path),
/// from source towards destination.
pub(crate) fn mark_path(grid: &mut Grid, path: &[Point]) {
    if let [_, interior @ .., _] = path {
        for &point in interior {
            grid.mark(point, TileType::Path);
        }
    }
}

/// Follows `predecessors` back from `destination` and returns the path from `source`.
pub(crate) fn walk_predecessors(
    predecessors: &FxHashMap<Point, Point>,
    source: Point,
    destination: Point,
) -> Vec<Point> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// The selectable search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the algorithm always finds a path with the fewest steps.
    pub fn is_shortest(self) -> bool {
        self != Algorithm::DepthFirst
    }

    /// Runs this algorithm on `grid`. Only [DepthFirst](Algorithm::DepthFirst) draws from `rng`.
    pub fn solve<R: Rng + ?Sized>(self, grid: &mut Grid, rng: &mut R) -> SearchOutcome {
        match self {
            Algorithm::DepthFirst => dfs(grid, rng),
            Algorithm::BreadthFirst => bfs(grid),
            Algorithm::Dijkstra => dijkstra(grid),
            Algorithm::AStar => astar(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

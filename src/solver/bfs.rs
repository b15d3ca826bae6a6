use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use std::collections::VecDeque;

use crate::grid::Grid;
use crate::solver::{mark_path, walk_predecessors, GridSolver, SearchOutcome};
use crate::tile::TileType;

/// Breadth-first search with a FIFO frontier. Tiles are marked visited when they are
/// enqueued, and the first path to reach the destination has the fewest steps.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        source: Point,
        destination: Point,
    ) -> Option<Vec<Point>> {
        let mut frontier = VecDeque::from([source]);
        let mut seen = FxHashSet::default();
        seen.insert(source);
        let mut predecessors = FxHashMap::default();
        while let Some(current) = frontier.pop_front() {
            if current == destination {
                let path = walk_predecessors(&predecessors, source, destination);
                mark_path(grid, &path);
                return Some(path);
            }
            for neighbour in grid.neighbours(current) {
                if seen.insert(neighbour) {
                    if neighbour != destination {
                        grid.mark(neighbour, TileType::Visited);
                    }
                    predecessors.insert(neighbour, current);
                    frontier.push_back(neighbour);
                }
            }
        }
        None
    }
}

/// Breadth-first search on the grid's source and destination.
pub fn bfs(grid: &mut Grid) -> SearchOutcome {
    BfsSolver.solve(grid)
}

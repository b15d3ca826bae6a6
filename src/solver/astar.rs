use grid_util::point::Point;

use crate::best_first::{best_first, Marking};
use crate::grid::Grid;
use crate::solver::{mark_path, GridSolver, SearchOutcome};
use crate::DEFAULT_HEURISTIC_FACTOR;

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the Euclidean heuristic. At 1.0 (the default) paths are shortest; larger
    /// values expand fewer tiles but may return longer paths.
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: DEFAULT_HEURISTIC_FACTOR,
        }
    }

    /// Straight-line distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        let dx = f64::from(p1.x - p2.x);
        let dy = f64::from(p1.y - p2.y);
        dx.hypot(dy) * self.heuristic_factor
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        source: Point,
        destination: Point,
    ) -> Option<Vec<Point>> {
        let (path, _cost) = best_first::<f64, _>(
            grid,
            source,
            destination,
            |p| self.heuristic(p, &destination),
            Marking::OnExpansion,
        )?;
        mark_path(grid, &path);
        Some(path)
    }
}

/// A* with the Euclidean heuristic on the grid's source and destination.
pub fn astar(grid: &mut Grid) -> SearchOutcome {
    AstarSolver::new().solve(grid)
}

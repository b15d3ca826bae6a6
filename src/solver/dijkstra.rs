use grid_util::point::Point;

use crate::best_first::{best_first, Marking};
use crate::grid::Grid;
use crate::solver::{mark_path, GridSolver, SearchOutcome};

/// Dijkstra's algorithm over tentative step counts. With unit step costs it finds paths as
/// short as [BfsSolver](crate::solver::BfsSolver), but tracks distances explicitly.
/// Tiles are marked visited when they are first discovered.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        source: Point,
        destination: Point,
    ) -> Option<Vec<Point>> {
        let (path, _cost) =
            best_first::<u32, _>(grid, source, destination, |_| 0, Marking::OnDiscovery)?;
        mark_path(grid, &path);
        Some(path)
    }
}

/// Dijkstra's algorithm on the grid's source and destination.
pub fn dijkstra(grid: &mut Grid) -> SearchOutcome {
    DijkstraSolver.solve(grid)
}

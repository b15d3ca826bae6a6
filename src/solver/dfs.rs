use grid_util::point::Point;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::solver::{GridSolver, SearchOutcome};
use crate::tile::TileType;

/// A tile on the current branch together with the directions still left to try from it.
struct Frame {
    point: Point,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(point: Point, rng: &mut R) -> Frame {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            point,
            directions,
            next: 0,
        }
    }
}

/// Randomized backtracking depth-first search. Each tile tries its neighbours in a freshly
/// shuffled order, so repeated runs on the same grid can find different, not necessarily
/// shortest, paths. Backtracking uses an explicit stack rather than recursion.
#[derive(Clone, Debug)]
pub struct DfsSolver<R> {
    pub rng: R,
}

impl<R: Rng> DfsSolver<R> {
    pub fn new(rng: R) -> DfsSolver<R> {
        DfsSolver { rng }
    }
}

impl<R: Rng> GridSolver for DfsSolver<R> {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        source: Point,
        destination: Point,
    ) -> Option<Vec<Point>> {
        if source == destination {
            return Some(vec![source]);
        }
        let mut stack = vec![Frame::new(source, &mut self.rng)];
        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = frame.directions.get(frame.next) else {
                // Dead end, tiles stay visited.
                stack.pop();
                continue;
            };
            frame.next += 1;
            let neighbour = dir.step(frame.point);
            let open = grid.tile_at(neighbour).is_some_and(TileType::passable);
            if neighbour == destination && open {
                // Unwind the branch, promoting it to path from the destination back.
                for frame in stack.iter().skip(1).rev() {
                    grid.mark(frame.point, TileType::Path);
                }
                let mut path = stack.iter().map(|f| f.point).collect::<Vec<_>>();
                path.push(neighbour);
                return Some(path);
            }
            if neighbour != source && grid.tile_at(neighbour) == Some(TileType::Empty) {
                grid.mark(neighbour, TileType::Visited);
                let frame = Frame::new(neighbour, &mut self.rng);
                stack.push(frame);
            }
        }
        None
    }
}

/// Depth-first search on the grid's source and destination, shuffling with `rng`.
pub fn dfs<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> SearchOutcome {
    DfsSolver::new(rng).solve(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn open_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        grid.set_source(0, 0).unwrap();
        grid.set_destination(width as i32 - 1, height as i32 - 1).unwrap();
        grid
    }

    #[test]
    fn finds_a_connected_path() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = open_grid(5, 4);
        let outcome = dfs(&mut grid, &mut rng);
        let path = outcome.path().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 3)));
        for w in path.windows(2) {
            assert_eq!((w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs(), 1);
        }
        for p in &path[1..path.len() - 1] {
            assert_eq!(grid.get_tile_point(*p), Ok(TileType::Path));
        }
        assert_eq!(grid.count(TileType::Path), path.len() - 2);
        assert_eq!(grid.get_tile(0, 0), Ok(TileType::Source));
        assert_eq!(grid.get_tile(4, 3), Ok(TileType::Destination));
    }

    #[test]
    fn path_is_logged_from_destination_back() {
        let mut grid = open_grid(6, 6);
        let outcome = dfs(&mut grid, &mut StdRng::seed_from_u64(5));
        let path = outcome.path().unwrap();
        let logged = grid
            .visitor_log()
            .iter()
            .filter(|v| v.tile == TileType::Path)
            .map(|v| v.point)
            .collect::<Vec<_>>();
        let mut expected = path[1..path.len() - 1].to_vec();
        expected.reverse();
        assert_eq!(logged, expected);
    }

    #[test]
    fn seed_determines_the_path() {
        let run = |seed| {
            let mut grid = open_grid(6, 6);
            dfs(&mut grid, &mut StdRng::seed_from_u64(seed))
        };
        assert_eq!(run(9), run(9));
        let distinct = (0..20)
            .map(|seed| run(seed).path().unwrap().to_vec())
            .collect::<HashSet<_>>();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn exhausts_reachable_tiles_before_failing() {
        // |..#.|
        // |..#G|
        // |S.#.|
        let mut grid = Grid::new(4, 3);
        for y in 0..3 {
            grid.set_tile(2, y, TileType::Wall).unwrap();
        }
        grid.set_source(0, 0).unwrap();
        grid.set_destination(3, 1).unwrap();
        let outcome = dfs(&mut grid, &mut StdRng::seed_from_u64(2));
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(grid.count(TileType::Visited), 5);
        assert_eq!(grid.count(TileType::Path), 0);
        assert_eq!(grid.get_tile(3, 1), Ok(TileType::Destination));
    }

    #[test]
    fn goal_is_the_destination_point_not_its_tile() {
        // |S..G| with only plain empty tiles at the ends
        let mut grid = Grid::new(4, 1);
        let mut solver = DfsSolver::new(StdRng::seed_from_u64(0));
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(3, 0))
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            (0..4).map(|x| Point::new(x, 0)).collect::<Vec<_>>()
        );
        assert_eq!(grid.count(TileType::Path), 2);

        // A destination tile elsewhere does not end the search early.
        let mut grid = Grid::new(4, 1);
        grid.set_destination(1, 0).unwrap();
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert_eq!(path, None);
    }
}

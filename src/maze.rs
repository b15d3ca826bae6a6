//! Randomized Prim's maze generation on a [Grid].
//!
//! The grid is filled with walls and carved out two tiles at a time: a frontier
//! wall is opened together with the wall behind it whenever it separates a
//! carved tile from an uncarved one. Every carved tile joins the passage tree
//! through exactly one opening, so the result is a perfect maze.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info, warn};
use rand::Rng;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::tile::TileType;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Opposite neighbour pairs inspected around a frontier wall.
const AXES: [(Direction, Direction); 2] = [
    (Direction::Left, Direction::Right),
    (Direction::Up, Direction::Down),
];

impl Grid {
    /// Replaces the contents of the grid with a randomly generated perfect maze.
    ///
    /// The first carved tile becomes the source and the last carved tile the
    /// destination. Grids too narrow to carve anything beyond the starting tile
    /// end up without a destination. Every carved tile is recorded in the
    /// visitor log as an [Empty](TileType::Empty) event.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear_grid();
        self.fill(TileType::Wall);

        let start = Point::new(
            rng.gen_range(0..self.width()) as i32,
            rng.gen_range(0..self.height()) as i32,
        );
        self.carve(start);
        let mut frontier = FxIndexSet::default();
        self.extend_frontier(start, &mut frontier);

        let mut last_carved = None;
        while !frontier.is_empty() {
            let pick = rng.gen_range(0..frontier.len());
            let Some(wall) = frontier.swap_remove_index(pick) else {
                break;
            };
            if self.tile_at(wall) != Some(TileType::Wall) {
                continue;
            }
            if let Some(behind) = self.passage_through(wall) {
                self.carve(wall);
                self.carve(behind);
                self.extend_frontier(behind, &mut frontier);
                last_carved = Some(behind);
            }
        }

        self.move_endpoint(start, TileType::Source);
        match last_carved {
            Some(end) => self.move_endpoint(end, TileType::Destination),
            None => warn!(
                "{}x{} grid too small to carve a passage, maze has no destination",
                self.width(),
                self.height()
            ),
        }
        info!(
            "Generated {}x{} maze with {} open tiles",
            self.width(),
            self.height(),
            self.visitor_log().len()
        );
        debug!("Maze runs from {} to {:?}", start, last_carved);
    }

    fn extend_frontier(&self, point: Point, frontier: &mut FxIndexSet<Point>) {
        frontier.extend(
            Direction::ALL
                .iter()
                .map(|dir| dir.step(point))
                .filter(|&p| self.tile_at(p) == Some(TileType::Wall)),
        );
    }

    /// If `wall` sits between a carved tile and a wall along either axis, returns
    /// the wall on the far side.
    fn passage_through(&self, wall: Point) -> Option<Point> {
        for (a, b) in AXES {
            let (pa, pb) = (a.step(wall), b.step(wall));
            match (self.tile_at(pa), self.tile_at(pb)) {
                (Some(TileType::Wall), Some(other)) if other.passable() => return Some(pa),
                (Some(other), Some(TileType::Wall)) if other.passable() => return Some(pb),
                _ => {}
            }
        }
        None
    }
}

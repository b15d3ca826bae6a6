use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::direction::Direction;
use crate::error::{GridError, Result};
use crate::tile::{TileType, Visit};

/// A fixed-size rectangle of [TileType]s stored densely, indexed by `y * width + x`.
///
/// [Grid] keeps track of the single source and destination tile and owns the
/// visitor log that searches and maze generation append to. All tile accessors
/// taking coordinates fail with [GridError::OutOfBounds] rather than clamping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileType>,
    source: Option<Point>,
    destination: Option<Point>,
    visitor_log: Vec<Visit>,
}

impl Grid {
    /// Creates a grid with every tile [Empty](TileType::Empty) and no source or destination.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Grid {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be at least 1x1, got {width}x{height}"
        );
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "grid dimensions must fit in i32 coordinates, got {width}x{height}"
        );
        Grid {
            width,
            height,
            tiles: vec![TileType::Empty; width * height],
            source: None,
            destination: None,
            visitor_log: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    fn ix(&self, point: Point) -> usize {
        debug_assert!(self.point_in_bounds(point));
        point.y as usize * self.width + point.x as usize
    }

    fn checked_ix(&self, point: Point) -> Result<usize> {
        if self.point_in_bounds(point) {
            Ok(self.ix(point))
        } else {
            Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
            })
        }
    }

    fn point_at(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Result<TileType> {
        self.get_tile_point(Point::new(x, y))
    }

    pub fn get_tile_point(&self, point: Point) -> Result<TileType> {
        self.checked_ix(point).map(|ix| self.tiles[ix])
    }

    /// The tile at `point`, or [None] outside the grid.
    pub(crate) fn tile_at(&self, point: Point) -> Option<TileType> {
        self.get_tile_point(point).ok()
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) -> Result<()> {
        self.set_tile_point(Point::new(x, y), tile)
    }

    /// Overwrites a tile. Setting [Source](TileType::Source) or
    /// [Destination](TileType::Destination) moves that marker here, and
    /// overwriting the current source or destination forgets it. Writing
    /// [Visited](TileType::Visited) or [Path](TileType::Path) is recorded in the
    /// visitor log.
    pub fn set_tile_point(&mut self, point: Point, tile: TileType) -> Result<()> {
        let ix = self.checked_ix(point)?;
        if matches!(tile, TileType::Source | TileType::Destination) {
            return self.place_endpoint(point, tile);
        }
        if self.source == Some(point) {
            self.source = None;
        }
        if self.destination == Some(point) {
            self.destination = None;
        }
        self.tiles[ix] = tile;
        if tile.is_marking() {
            self.visitor_log.push(Visit::new(point, tile));
        }
        Ok(())
    }

    pub fn source(&self) -> Option<Point> {
        self.source
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    pub fn set_source(&mut self, x: i32, y: i32) -> Result<()> {
        self.place_endpoint(Point::new(x, y), TileType::Source)
    }

    pub fn set_destination(&mut self, x: i32, y: i32) -> Result<()> {
        self.place_endpoint(Point::new(x, y), TileType::Destination)
    }

    /// Moves the source or destination marker to `point`. The tile the marker
    /// previously occupied reverts to [Empty](TileType::Empty), so at most one
    /// tile of each kind exists at any time.
    fn place_endpoint(&mut self, point: Point, tile: TileType) -> Result<()> {
        self.checked_ix(point)?;
        self.move_endpoint(point, tile);
        Ok(())
    }

    pub(crate) fn move_endpoint(&mut self, point: Point, tile: TileType) {
        let ix = self.ix(point);
        let (previous, other) = match tile {
            TileType::Source => (self.source.replace(point), &mut self.destination),
            _ => (self.destination.replace(point), &mut self.source),
        };
        if *other == Some(point) {
            *other = None;
        }
        if let Some(previous) = previous.filter(|&p| p != point) {
            let previous_ix = self.ix(previous);
            self.tiles[previous_ix] = TileType::Empty;
        }
        self.tiles[ix] = tile;
    }

    /// Turns every [Visited](TileType::Visited) and [Path](TileType::Path) tile back into
    /// [Empty](TileType::Empty).
    pub fn clear_markings(&mut self) {
        for tile in self.tiles.iter_mut().filter(|t| t.is_marking()) {
            *tile = TileType::Empty;
        }
    }

    /// Resets every tile to [Empty](TileType::Empty) and drops the source,
    /// destination and visitor log.
    pub fn clear_grid(&mut self) {
        self.fill(TileType::Empty);
        self.source = None;
        self.destination = None;
        self.visitor_log.clear();
    }

    pub(crate) fn fill(&mut self, tile: TileType) {
        self.tiles.fill(tile);
    }

    pub fn visitor_log(&self) -> &[Visit] {
        &self.visitor_log
    }

    pub fn clear_visitor_log(&mut self) {
        self.visitor_log.clear();
    }

    /// Hands the visitor log over to the caller, leaving it empty.
    pub fn take_visitor_log(&mut self) -> Vec<Visit> {
        std::mem::take(&mut self.visitor_log)
    }

    /// Applies a search annotation. Only [Empty](TileType::Empty) becomes
    /// [Visited](TileType::Visited), and only empty or visited tiles become
    /// [Path](TileType::Path); everything else, including points outside the
    /// grid, is left alone. Returns whether the tile changed.
    pub(crate) fn mark(&mut self, point: Point, tile: TileType) -> bool {
        let Ok(ix) = self.checked_ix(point) else {
            return false;
        };
        let current = self.tiles[ix];
        let applies = match tile {
            TileType::Visited => current == TileType::Empty,
            TileType::Path => matches!(current, TileType::Empty | TileType::Visited),
            _ => false,
        };
        if applies {
            self.tiles[ix] = tile;
            self.visitor_log.push(Visit::new(point, tile));
        }
        applies
    }

    /// Opens a wall during maze generation and logs it for replay.
    pub(crate) fn carve(&mut self, point: Point) {
        let ix = self.ix(point);
        self.tiles[ix] = TileType::Empty;
        self.visitor_log.push(Visit::new(point, TileType::Empty));
    }

    /// The in-bounds, non-wall 4-neighbours of `point` in [Direction::ALL] order.
    pub fn neighbours(&self, point: Point) -> SmallVec<[Point; 4]> {
        Direction::ALL
            .iter()
            .map(|dir| dir.step(point))
            .filter(|&p| self.tile_at(p).is_some_and(TileType::passable))
            .collect()
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterates over all tiles in row-major order starting at `(0, 0)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TileType)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(ix, &tile)| (self.point_at(ix), tile))
    }

    /// Links up passable neighbours into connected components.
    fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.tiles.len());
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let ix = y * self.width + x;
            if !self.tiles[ix].passable() {
                continue;
            }
            if x + 1 < self.width && self.tiles[ix + 1].passable() {
                components.union(ix, ix + 1);
            }
            if y + 1 < self.height && self.tiles[ix + self.width].passable() {
                components.union(ix, ix + self.width);
            }
        }
        components
    }

    /// Checks whether a wall-free 4-connected route joins `start` and `goal`.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        match (self.tile_at(start), self.tile_at(goal)) {
            (Some(a), Some(b)) if a.passable() && b.passable() => self
                .components()
                .equiv(self.ix(start), self.ix(goal)),
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height).rev() {
            let row = &self.tiles[y * self.width..(y + 1) * self.width];
            writeln!(f, "{}", row.iter().map(|t| t.symbol()).collect::<String>())?;
        }
        Ok(())
    }
}

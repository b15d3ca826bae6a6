//! # maze_pathfinding
//!
//! A tile grid with a randomized
//! [Prim's](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Iterative_randomized_Prim's_algorithm_(without_stack,_without_sets))
//! maze generator and four interchangeable searches (depth-first, breadth-first,
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)) that mark the explored tiles and
//! the found path directly on the [Grid]. Movement is 4-connected and every step costs 1.
//!
//! Each search and maze generation appends to the grid's visitor log, the ordered list of
//! tile changes a front end can replay as an animation after the call returns.
//!
//! ```
//! use maze_pathfinding::{solver::bfs, Grid, TileType};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_tile(1, 1, TileType::Wall).unwrap();
//! grid.set_source(0, 0).unwrap();
//! grid.set_destination(2, 2).unwrap();
//! let outcome = bfs(&mut grid);
//! assert_eq!(outcome.path().map(|p| p.len()), Some(5));
//! ```
mod best_first;
pub mod direction;
pub mod error;
pub mod grid;
mod maze;
pub mod solver;
pub mod tile;

pub use direction::Direction;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use grid_util::point::Point;
pub use solver::{Algorithm, GridSolver, SearchOutcome};
pub use tile::{TileType, Visit};

/// Default scaling of the A* heuristic, which keeps it admissible.
pub const DEFAULT_HEURISTIC_FACTOR: f64 = 1.0;

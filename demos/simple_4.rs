use maze_pathfinding::solver::bfs;
use maze_pathfinding::{Grid, TileType};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |  G|
// | # |
// |S  |
//  ___
// where
// - # marks a wall
// - S marks the source
// - G marks the destination
//
// Tiles have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3);
    grid.set_tile(1, 1, TileType::Wall).unwrap();
    grid.set_source(0, 0).unwrap();
    grid.set_destination(2, 2).unwrap();
    let outcome = bfs(&mut grid);
    println!("{}", grid);
    println!("Path:");
    for p in outcome.path().unwrap_or_default() {
        println!("{:?}", p);
    }
}

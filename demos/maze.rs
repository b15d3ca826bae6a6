use maze_pathfinding::{Algorithm, Grid, TileType};

// Generates a maze, solves it with every algorithm and replays the visitor log of each
// search frame by frame, the way a front end would animate it.

const FRAMES: usize = 4;

fn main() {
    let mut rng = rand::thread_rng();
    let mut maze = Grid::new(21, 11);
    maze.generate_maze(&mut rng);
    println!("Maze ({} tiles carved):\n{}", maze.visitor_log().len(), maze);

    for algorithm in Algorithm::ALL {
        let mut grid = maze.clone();
        let outcome = algorithm.solve(&mut grid, &mut rng);
        let log = grid.take_visitor_log();
        println!(
            "{}: {} tiles explored, path of {:?} steps",
            algorithm,
            log.iter().filter(|v| v.tile == TileType::Visited).count(),
            outcome.path().map(|p| p.len() - 1)
        );

        let mut replay = maze.clone();
        let chunk = log.len().div_ceil(FRAMES).max(1);
        for (frame, visits) in log.chunks(chunk).enumerate() {
            for visit in visits {
                replay
                    .set_tile_point(visit.point, visit.tile)
                    .expect("logged tiles lie in the grid");
            }
            println!("Frame {}:\n{}", frame + 1, replay);
        }
    }
}

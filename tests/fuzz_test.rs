/// Fuzzes the searches by checking on many random grids that every algorithm finds a path
/// exactly when the destination is reachable, that the marked path is a valid 4-connected
/// route, and that the shortest-path algorithms agree on its length.
use itertools::Itertools;
use maze_pathfinding::{Algorithm, Grid, Point, SearchOutcome, TileType};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(w, h);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.4) {
                grid.set_tile(x, y, TileType::Wall).unwrap();
            }
        }
    }
    grid
}

fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for (a, b) in path.iter().tuple_windows() {
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1, "{a} -> {b} is not a step");
    }
    for p in &path[1..path.len() - 1] {
        assert_eq!(grid.get_tile_point(*p), Ok(TileType::Path));
    }
    assert_eq!(grid.count(TileType::Path), path.len() - 2);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng);
        random_grid.set_source(start.x, start.y).unwrap();
        random_grid.set_destination(end.x, end.y).unwrap();
        let reachable = random_grid.reachable(start, end);

        let mut shortest = None;
        for algorithm in Algorithm::ALL {
            let mut grid = random_grid.clone();
            let outcome = algorithm.solve(&mut grid, &mut rng);
            // Show the grid if the outcome is wrong
            if outcome.is_found() != reachable {
                println!("{algorithm} disagrees with reachability on\n{random_grid}");
            }
            assert_eq!(outcome.is_found(), reachable);
            assert_eq!(grid.get_tile_point(start), Ok(TileType::Source));
            assert_eq!(grid.get_tile_point(end), Ok(TileType::Destination));
            assert_eq!(grid.count(TileType::Wall), random_grid.count(TileType::Wall));

            match outcome {
                SearchOutcome::Found(path) => {
                    assert_valid_path(&grid, &path, start, end);
                    if algorithm.is_shortest() {
                        assert_eq!(*shortest.get_or_insert(path.len()), path.len());
                    }
                }
                SearchOutcome::NotFound => assert_eq!(grid.count(TileType::Path), 0),
            }
        }
    }
}

#[test]
fn dfs_is_never_shorter() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_source(0, 0).unwrap();
        grid.set_destination(N as i32 - 1, N as i32 - 1).unwrap();
        let mut bfs_grid = grid.clone();
        let dfs_len = Algorithm::DepthFirst
            .solve(&mut grid, &mut rng)
            .path()
            .map(<[Point]>::len);
        let bfs_len = Algorithm::BreadthFirst
            .solve(&mut bfs_grid, &mut rng)
            .path()
            .map(<[Point]>::len);
        assert_eq!(dfs_len.is_some(), bfs_len.is_some());
        if let (Some(d), Some(b)) = (dfs_len, bfs_len) {
            assert!(d >= b);
        }
    }
}

#[test]
fn log_replay_reconstructs_markings() {
    let mut rng = StdRng::seed_from_u64(2);
    for algorithm in Algorithm::ALL {
        for _ in 0..200 {
            let mut grid = random_grid(9, 7, &mut rng);
            grid.set_source(0, 3).unwrap();
            grid.set_destination(8, 3).unwrap();
            let mut replay = grid.clone();
            replay.clear_visitor_log();
            algorithm.solve(&mut grid, &mut rng);
            for visit in grid.visitor_log() {
                replay.set_tile_point(visit.point, visit.tile).unwrap();
            }
            let final_tiles = grid.iter().collect::<Vec<_>>();
            assert_eq!(replay.iter().collect::<Vec<_>>(), final_tiles);
        }
    }
}

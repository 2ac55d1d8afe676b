/// Fuzzes the pathfinder by checking on many random grids that a path is found exactly when the
/// goal lies on the start's connected component, that found paths are valid and as short as a
/// breadth-first search says, and that failed searches explore the whole start component.
use grid_astar::{find_path, Cell, ConnectedComponents, GridMap};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> GridMap {
    let mut grid = GridMap::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            grid.set_blocked(Cell::new(x, y), rng.gen_bool(0.4));
        }
    }
    grid
}

fn visualize_grid(grid: &GridMap, start: &Cell, end: &Cell) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Cell::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Number of steps on a shortest path, by breadth-first search.
fn bfs_distance(grid: &GridMap, start: Cell, goal: Cell) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |c: Cell| c.y as usize * grid.width() + c.x as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(start)] = 0;
    while let Some(c) = queue.pop_front() {
        if c == goal {
            return Some(dist[ix(c)]);
        }
        for n in grid.neighbors4(c) {
            if dist[ix(n)] == usize::MAX {
                dist[ix(n)] = dist[ix(c)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_blocked(start, false);
        grid.set_blocked(end, false);
        let components = ConnectedComponents::new(&grid);
        let reachable = components.reachable(start, end);
        let res = find_path(&grid, start, end);
        // Show the grid if the outcome disagrees with the components
        if res.success != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(res.success, reachable);
        assert!(res.is_valid_path(&grid, start, end));
        if reachable {
            assert_eq!(Some(res.path.len() - 1), bfs_distance(&grid, start, end));
        } else {
            assert_eq!(res.closed.len(), components.component_size(start));
            assert!(res
                .closed
                .iter()
                .all(|&c| components.component_of(c) == components.component_of(start)));
        }
    }
}

#[test]
fn fuzz_random_endpoints() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let (w, h) = (rng.gen_range(1..12), rng.gen_range(1..12));
        let grid = random_grid(w, h, &mut rng);
        // Endpoints may fall outside the grid or on obstacles.
        let start = Cell::new(rng.gen_range(-1..=w as i32), rng.gen_range(-1..=h as i32));
        let goal = Cell::new(rng.gen_range(-1..=w as i32), rng.gen_range(-1..=h as i32));
        let res = find_path(&grid, start, goal);
        assert!(res.is_valid_path(&grid, start, goal));
        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            assert!(!res.success);
            assert!(res.closed.is_empty());
            continue;
        }
        let expected = bfs_distance(&grid, start, goal);
        assert_eq!(res.success, expected.is_some());
        if let Some(d) = expected {
            assert_eq!(res.cost(), Some(d as u32));
        }
        // Every cell is finalized at most once.
        let mut closed = res.closed.clone();
        closed.sort_by_key(|c| (c.y, c.x));
        closed.dedup();
        assert_eq!(closed.len(), res.closed.len());
    }
}

/// Without obstacles the path length is the Manhattan distance plus one.
#[test]
fn free_grid_paths_are_manhattan() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = GridMap::new(16, 9);
    for _ in 0..500 {
        let start = Cell::new(rng.gen_range(0..16), rng.gen_range(0..9));
        let goal = Cell::new(rng.gen_range(0..16), rng.gen_range(0..9));
        let res = find_path(&grid, start, goal);
        assert!(res.success);
        assert_eq!(res.path.len(), start.manhattan_distance(&goal) as usize + 1);
        assert!(res.is_valid_path(&grid, start, goal));
    }
}

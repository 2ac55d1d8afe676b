use grid_astar::{find_path, AStarResult, Cell, GridMap};
use std::collections::HashSet;

// Prints a grid with the explored cells and the resulting path overlaid, once with a gap in the
// wall and once with the gap closed.
//
// - S, G mark start and goal
// - * marks the path
// - o marks explored cells off the path
// - # marks an obstacle

fn overlay(grid: &GridMap, start: Cell, goal: Cell, result: &AStarResult) {
    let path: HashSet<Cell> = result.path.iter().copied().collect();
    let closed: HashSet<Cell> = result.closed.iter().copied().collect();
    for y in 0..grid.height() as i32 {
        let row = (0..grid.width() as i32)
            .map(|x| {
                let p = Cell::new(x, y);
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if grid.is_blocked(p) {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else if closed.contains(&p) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!(
        "success: {}, path cells: {}, explored: {}\n",
        result.success,
        result.path.len(),
        result.closed.len()
    );
}

fn main() {
    let mut grid: GridMap = "
        ............
        .....#......
        .....#......
        .....#......
        .....#......
        .....#......
        ............
    "
    .parse()
    .expect("layout is well-formed");
    let start = Cell::new(1, 3);
    let goal = Cell::new(10, 3);

    let result = find_path(&grid, start, goal);
    overlay(&grid, start, goal, &result);

    grid.set_rect(Cell::new(5, 0), 1, 7, true);
    let result = find_path(&grid, start, goal);
    overlay(&grid, start, goal, &result);
}

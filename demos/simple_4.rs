use grid_astar::{find_path, Cell, GridMap};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = GridMap::new(3, 3);
    grid.set_blocked(Cell::new(1, 1), true);
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let result = find_path(&grid, start, end);
    if !result.success {
        println!("No path from {} to {}", start, end);
        return;
    }
    println!("Path:");
    for p in result.path {
        println!("{}", p);
    }
}

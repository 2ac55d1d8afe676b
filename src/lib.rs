//! # grid_astar
//!
//! Shortest paths on a 4-connected obstacle grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Every step has unit cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) serves as heuristic,
//! which is admissible and consistent on such a grid, so returned paths are optimal.
//!
//! A [GridMap] holds the obstacles and is only ever read by [find_path]. Besides the path, the
//! returned [AStarResult] records which cells were explored, in order, to help visualize a
//! search or diagnose why it failed. [ConnectedComponents] offers a separate reachability check
//! on a snapshot of the grid.
//!
//! ```
//! use grid_astar::{find_path, Cell, GridMap};
//!
//! let mut grid = GridMap::new(5, 5);
//! grid.set_blocked(Cell::new(2, 2), true);
//! let result = find_path(&grid, Cell::new(0, 0), Cell::new(4, 4));
//! assert!(result.success);
//! assert_eq!(result.path.len(), 9);
//! ```
pub mod astar;
pub mod cell;
pub mod components;
pub mod grid_map;
pub mod pathfinder;

pub use cell::Cell;
pub use components::ConnectedComponents;
pub use grid_map::GridMap;
pub use pathfinder::{find_path, AStarResult};

/// Cost of moving to an orthogonally adjacent cell.
pub const EDGE_COST: u32 = 1;

use crate::astar::astar;
use crate::cell::Cell;
use crate::grid_map::GridMap;
use crate::EDGE_COST;
use itertools::Itertools;
use log::{debug, info};

/// Outcome of a single [find_path] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AStarResult {
    /// Cells from start to goal, both inclusive. Empty unless `success`.
    pub path: Vec<Cell>,
    /// Cells in the order the search finalized them. Only meant for diagnostics.
    pub closed: Vec<Cell>,
    pub success: bool,
}

impl AStarResult {
    /// Number of steps along the path, [None] if no path was found.
    pub fn cost(&self) -> Option<u32> {
        if self.success {
            Some(self.path.len().saturating_sub(1) as u32 * EDGE_COST)
        } else {
            None
        }
    }

    /// Checks that the result describes a walkable, 4-connected path from `start` to `goal` on
    /// `grid`, or is an empty failure.
    pub fn is_valid_path(&self, grid: &GridMap, start: Cell, goal: Cell) -> bool {
        if !self.success {
            return self.path.is_empty();
        }
        self.path.first() == Some(&start)
            && self.path.last() == Some(&goal)
            && self.path.iter().all(|&c| grid.is_walkable(c))
            && self
                .path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.manhattan_distance(b) == 1)
    }
}

/// Computes a shortest 4-connected path from `start` to `goal` with A*, using the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Every
/// step costs [EDGE_COST], so the heuristic is consistent and the path has the minimal number
/// of cells.
///
/// Fails immediately, without exploring, when either endpoint is off the grid or blocked. A
/// start equal to the goal yields the single-cell path and an empty exploration trace. If the
/// goal cannot be reached, `closed` holds every cell of the start's component.
pub fn find_path(grid: &GridMap, start: Cell, goal: Cell) -> AStarResult {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        debug!("{} or {} is not walkable", start, goal);
        return AStarResult::default();
    }
    if start == goal {
        return AStarResult {
            path: vec![start],
            closed: Vec::new(),
            success: true,
        };
    }

    let outcome = astar(
        &start,
        |&cell| {
            grid.neighbors4(cell)
                .into_iter()
                .map(|n| (n, EDGE_COST))
        },
        |cell| cell.manhattan_distance(&goal) * EDGE_COST,
        |&cell| cell == goal,
    );
    match outcome.path {
        Some((path, cost)) if !path.is_empty() => {
            info!(
                "Found path from {} to {} with cost {} after expanding {} cells",
                start,
                goal,
                cost,
                outcome.expanded.len()
            );
            AStarResult {
                path,
                closed: outcome.expanded,
                success: true,
            }
        }
        _ => {
            info!(
                "{} is not reachable from {}, expanded {} cells",
                goal,
                start,
                outcome.expanded.len()
            );
            AStarResult {
                path: Vec::new(),
                closed: outcome.expanded,
                success: false,
            }
        }
    }
}

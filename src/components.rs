use crate::cell::Cell;
use crate::grid_map::GridMap;
use log::debug;
use petgraph::unionfind::UnionFind;

/// A snapshot of the 4-connected components of the walkable cells of a [GridMap], kept in a
/// [UnionFind] structure. Mutating the grid afterwards does not update the snapshot.
#[derive(Clone, Debug)]
pub struct ConnectedComponents {
    grid: GridMap,
    components: UnionFind<usize>,
}

impl ConnectedComponents {
    /// Links up every walkable cell with its walkable right and down neighbours.
    pub fn new(grid: &GridMap) -> ConnectedComponents {
        let grid = grid.clone();
        let mut components = UnionFind::new(grid.width() * grid.height());
        for cell in grid.cells() {
            let Some(parent_ix) = walkable_index(&grid, cell) else {
                continue;
            };
            for n in [Cell::new(cell.x + 1, cell.y), Cell::new(cell.x, cell.y + 1)] {
                if let Some(ix) = walkable_index(&grid, n) {
                    components.union(parent_ix, ix);
                }
            }
        }
        debug!(
            "Generated connected components for {}x{} grid",
            grid.width(),
            grid.height()
        );
        ConnectedComponents { grid, components }
    }

    fn ix(&self, cell: Cell) -> Option<usize> {
        walkable_index(&self.grid, cell)
    }

    /// Retrieves the component id a walkable cell belongs to, [None] for blocked or
    /// out-of-bounds cells.
    pub fn component_of(&self, cell: Cell) -> Option<usize> {
        self.ix(cell).map(|ix| self.components.find(ix))
    }

    /// Checks if both cells are walkable and on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        match (self.ix(start), self.ix(goal)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }

    /// Number of cells on the component of `cell`; zero if it is not walkable.
    pub fn component_size(&self, cell: Cell) -> usize {
        match self.component_of(cell) {
            Some(id) => self
                .grid
                .cells()
                .filter_map(|c| self.ix(c))
                .filter(|&ix| self.components.find(ix) == id)
                .count(),
            None => 0,
        }
    }
}

/// Row-major index of `cell` if it is walkable on `grid`.
fn walkable_index(grid: &GridMap, cell: Cell) -> Option<usize> {
    grid.index_of(cell).filter(|_| !grid.is_blocked(cell))
}

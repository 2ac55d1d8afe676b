use crate::cell::Cell;
use anyhow::{anyhow, bail};
use core::fmt;
use log::debug;
use smallvec::SmallVec;
use std::str::FromStr;

/// [GridMap] holds the obstacle state of a fixed-size rectangular grid. Cells are stored
/// row-major as [bool] values that determine whether a space is occupied ([true]) or free
/// ([false]).
///
/// Reads treat every coordinate outside the grid as blocked, so callers can rely on
/// [is_walkable](Self::is_walkable) alone. Writes outside the grid are silently ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl GridMap {
    /// Creates a `width` by `height` grid with every cell free. Zero dimensions are not
    /// rejected; such a grid simply has no cells in bounds.
    pub fn new(width: usize, height: usize) -> GridMap {
        GridMap {
            width,
            height,
            blocked: vec![false; width * height],
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.y as usize * self.width + cell.x as usize
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn index_of(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell).then(|| self.ix(cell))
    }

    /// Dimensions as coordinates, saturating for grids wider or taller than [i32::MAX].
    fn coord_limits(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }
    /// Whether the cell holds an obstacle. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return true;
        }
        self.blocked[self.ix(cell)]
    }
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if !self.in_bounds(cell) {
            return;
        }
        let ix = self.ix(cell);
        self.blocked[ix] = blocked;
    }
    pub fn toggle_blocked(&mut self, cell: Cell) {
        if !self.in_bounds(cell) {
            return;
        }
        let ix = self.ix(cell);
        self.blocked[ix] = !self.blocked[ix];
    }

    /// Sets every cell of the `w` by `h` rectangle with its top-left corner at `origin`. Parts of
    /// the rectangle outside the grid are skipped.
    pub fn set_rect(&mut self, origin: Cell, w: i32, h: i32, blocked: bool) {
        let (width, height) = self.coord_limits();
        let xs = origin.x.max(0)..origin.x.saturating_add(w).min(width);
        let ys = origin.y.max(0)..origin.y.saturating_add(h).min(height);
        for y in ys {
            for x in xs.clone() {
                self.set_blocked(Cell::new(x, y), blocked);
            }
        }
    }

    /// Frees every cell.
    pub fn clear(&mut self) {
        debug!("Clearing {}x{} grid", self.width, self.height);
        self.blocked.fill(false);
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// The walkable orthogonal neighbours of `cell`, in the order right, left, down, up. The
    /// order fixes how ties are explored during search. `cell` itself may lie anywhere.
    pub fn neighbors4(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        cell.neighborhood4()
            .into_iter()
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    /// Iterates over all in-bounds cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (width, height) = self.coord_limits();
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.coord_limits();
        for y in 0..height {
            let row = (0..width)
                .map(|x| if self.is_blocked(Cell::new(x, y)) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Parses a layout with one line per row, `#` for obstacles and `.` for free cells. The first
/// line is `y = 0`. Blank lines are ignored.
impl FromStr for GridMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => bail!("grid layout is empty"),
        };
        let mut grid = GridMap::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                bail!("row {} has {} cells, expected {}", y, row_width, width);
            }
            for (x, c) in row.chars().enumerate() {
                let blocked = match c {
                    '#' => true,
                    '.' => false,
                    other => {
                        return Err(anyhow!("unexpected '{}' at row {}, column {}", other, y, x))
                    }
                };
                grid.set_blocked(Cell::new(x as i32, y as i32), blocked);
            }
        }
        Ok(grid)
    }
}

use core::fmt;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// An integer coordinate on the grid. Cells carry no identity beyond their coordinates and are
/// always passed by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Packs both coordinates into one 64-bit key. Unlike shifting and xor-ing, this is
    /// injective over every pair of [i32] values.
    pub fn key(&self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal candidates in the order right, left, down, up. Bounds and obstacles
    /// are not considered here. Candidates that would leave the [i32] range are omitted.
    pub fn neighborhood4(&self) -> SmallVec<[Cell; 4]> {
        [
            self.x.checked_add(1).map(|x| Cell::new(x, self.y)),
            self.x.checked_sub(1).map(|x| Cell::new(x, self.y)),
            self.y.checked_add(1).map(|y| Cell::new(self.x, y)),
            self.y.checked_sub(1).map(|y| Cell::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.key());
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

use crate::direction::Direction;
use std::fmt;

/// Grid coordinate. Signed so a step off the edge is still representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell one step away in `direction`
    #[inline]
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance, the search heuristic on a 4-connected grid
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction of a single step from `self` to `other`, if they are adjacent (or equal)
    #[inline]
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }

    /// The four axis-adjacent cells, in [`Direction::ALL`] order
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

use crate::error::SnakeError;
use std::str::FromStr;

/// Unit moves on the grid, plus `Still` for the pre-start heading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Still = 4,
}

impl FromStr for Direction {
    type Err = SnakeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"up" => Ok(Direction::Up),
            b"down" => Ok(Direction::Down),
            b"left" => Ok(Direction::Left),
            b"right" => Ok(Direction::Right),
            b"still" => Ok(Direction::Still),
            _ => Err(SnakeError::InvalidDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// The four moving directions, in neighbor expansion order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the delta (dx, dy) for moving in this direction
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Still => (0, 0),
        }
    }

    /// Inverse of [`Direction::delta`]
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, 0) => Some(Direction::Still),
            _ => None,
        }
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Still => "still",
        }
    }
}

use crate::world::Cell;
use std::fmt;

/// Setup and configuration errors. Simulation anomalies are outcomes, not errors.
#[derive(Debug)]
pub enum SnakeError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Invalid line in a scenario file
    InvalidLine(String),
    /// Invalid direction string
    InvalidDirection(String),
    /// Grid dimensions are unusable
    InvalidGrid(String),
    /// A cell lies outside the grid
    OutOfBounds(Cell),
    /// Two body segments share a cell
    OverlappingBody(Cell),
    /// Food placed on a body segment
    FoodOnBody(Cell),
    /// No free cell left for food
    GridFull,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::IoError(err) => write!(f, "IO error: {}", err),
            SnakeError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            SnakeError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            SnakeError::InvalidGrid(msg) => write!(f, "Invalid grid: {}", msg),
            SnakeError::OutOfBounds(cell) => write!(f, "Cell {} is out of bounds", cell),
            SnakeError::OverlappingBody(cell) => write!(f, "Body overlaps itself at {}", cell),
            SnakeError::FoodOnBody(cell) => write!(f, "Food at {} sits on the body", cell),
            SnakeError::GridFull => write!(f, "No free cell left for food"),
        }
    }
}

impl std::error::Error for SnakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnakeError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SnakeError {
    fn from(err: std::io::Error) -> Self {
        SnakeError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SnakeError>;

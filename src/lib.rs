//! # A* Snake
//!
//! A snake that drives itself across a bounded grid toward food, picking
//! every move with an A* shortest-path search around its own body.
//!
//! This library provides the grid state and movement rules, the planner,
//! and a tick driver; drawing goes through the [`surface::Surface`] trait.

pub mod cli;
pub mod direction;
pub mod error;
pub mod planner;
pub mod simulation;
pub mod snake;
pub mod surface;
pub mod utils;
pub mod world;

pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SnakeError};
pub use planner::{PathPlanner, Plan};
pub use simulation::Simulation;
pub use snake::Snake;
pub use world::{Cell, GridWorld, Outcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Cell, Direction, GridWorld, Outcome, PathPlanner, Plan, Result, Simulation, Snake,
        SnakeError,
    };
}

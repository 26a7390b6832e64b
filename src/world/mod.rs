pub mod cell;
pub mod parser;
pub mod world;

pub use cell::Cell;
pub use parser::{parse_scenario, parse_scenario_str};
pub use world::{Collision, GridWorld, Outcome};

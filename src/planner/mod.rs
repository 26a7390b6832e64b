pub mod planner;
pub mod search;

pub use planner::{PathPlanner, Plan};
pub use search::SearchGrid;

use crate::direction::Direction;
use crate::planner::search::SearchGrid;
use crate::world::{Cell, GridWorld};

/// What the planner decided for one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    /// First step of a shortest path `steps` moves long
    Path { direction: Direction, steps: usize },
    /// No usable path; keep the previous heading
    Fallback(Direction),
}

impl Plan {
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            Plan::Path { direction, .. } => direction,
            Plan::Fallback(direction) => direction,
        }
    }

    #[inline]
    pub fn is_fallback(self) -> bool {
        matches!(self, Plan::Fallback(_))
    }
}

/// Chooses each tick's move by A* from head to food
pub struct PathPlanner {
    search: SearchGrid,
}

impl PathPlanner {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            search: SearchGrid::new(cols, rows),
        }
    }

    /// Planner sized for `world`
    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.cols(), world.rows())
    }

    /// Shortest head-to-food path. Segments behind the head are walls; the
    /// head's own cell is free since it vacates on the next move.
    pub fn find_path(&mut self, world: &GridWorld) -> Option<Vec<Cell>> {
        self.fit(world);
        self.search
            .find_path(world.head(), world.food(), world.snake().trailing())
    }

    /// Resize the search buffers when `world` has different dimensions
    pub fn fit(&mut self, world: &GridWorld) {
        if self.search.cols() != world.cols() || self.search.rows() != world.rows() {
            self.search = SearchGrid::new(world.cols(), world.rows());
        }
    }

    /// Plan the next move, falling back to the last heading when the food is unreachable
    pub fn plan(&mut self, world: &GridWorld) -> Plan {
        let fallback = Plan::Fallback(world.last_direction());
        match self.find_path(world) {
            Some(path) if path.len() >= 2 => match path[0].direction_to(path[1]) {
                Some(direction) => Plan::Path {
                    direction,
                    steps: path.len() - 1,
                },
                None => fallback,
            },
            _ => fallback,
        }
    }

    /// Direction for the next tick
    #[inline]
    pub fn decide(&mut self, world: &GridWorld) -> Direction {
        self.plan(world).direction()
    }

    /// Cells expanded by the most recent search
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.search.last_expanded()
    }
}

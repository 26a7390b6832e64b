use crate::direction::Direction;
use crate::error::{Result, SnakeError};
use crate::snake::Snake;
use crate::utils::NO_PARENT;
use crate::world::cell::Cell;

/// Why a move was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    /// New head left the grid
    Wall,
    /// New head landed on a segment behind the head
    Body,
}

impl Collision {
    pub const fn as_str(self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::Body => "body",
        }
    }
}

/// Result of a single [`GridWorld::advance`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    /// Head reached the food; the body grew by one and food must be relocated
    Ate,
    /// Move refused; the body is untouched
    Collided(Collision),
}

/// Authoritative simulation state: fixed grid, snake body, food, last heading
#[derive(Clone, Debug)]
pub struct GridWorld {
    cols: u32,
    rows: u32,
    snake: Snake,
    food: Cell,
    last_direction: Direction,
}

impl GridWorld {
    /// Fresh world: one-cell snake at the grid center, food sampled right away
    pub fn new(cols: u32, rows: u32, rng: &mut fastrand::Rng) -> Result<Self> {
        check_dimensions(cols, rows)?;
        let center = Cell::new((cols / 2) as i32, (rows / 2) as i32);
        let mut world = Self {
            cols,
            rows,
            snake: Snake::new(center),
            food: center,
            last_direction: Direction::Still,
        };
        world.relocate_food(rng)?;
        Ok(world)
    }

    /// Build a world from an explicit layout, validating every invariant
    pub fn from_parts(
        cols: u32,
        rows: u32,
        body: Vec<Cell>,
        food: Cell,
        last_direction: Direction,
    ) -> Result<Self> {
        check_dimensions(cols, rows)?;
        let mut seen = vec![false; cols as usize * rows as usize];
        for &cell in &body {
            let idx = index_in(cols, rows, cell).ok_or(SnakeError::OutOfBounds(cell))?;
            if seen[idx] {
                return Err(SnakeError::OverlappingBody(cell));
            }
            seen[idx] = true;
        }
        let snake = Snake::from_cells(body)
            .ok_or_else(|| SnakeError::InvalidGrid("body needs at least one cell".to_string()))?;

        let food_idx = index_in(cols, rows, food).ok_or(SnakeError::OutOfBounds(food))?;
        if seen[food_idx] {
            return Err(SnakeError::FoodOnBody(food));
        }

        Ok(Self {
            cols,
            rows,
            snake,
            food,
            last_direction,
        })
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    #[inline]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[inline]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[inline]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Record the heading chosen for the current tick
    #[inline]
    pub fn set_last_direction(&mut self, direction: Direction) {
        self.last_direction = direction;
    }

    /// Check if a cell lies on the grid
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        index_in(self.cols, self.rows, cell).is_some()
    }

    /// Flat `y * cols + x` index of an in-bounds cell
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        index_in(self.cols, self.rows, cell)
    }

    /// Check if any body segment covers `cell`; with `exclude_head` the head is ignored
    pub fn is_occupied(&self, cell: Cell, exclude_head: bool) -> bool {
        if exclude_head {
            self.snake.hits_trailing(cell)
        } else {
            self.snake.covers(cell)
        }
    }

    /// Every in-bounds cell not covered by the body, row-major
    pub fn free_cells(&self) -> Vec<Cell> {
        let mut taken = vec![false; self.cols as usize * self.rows as usize];
        for cell in self.snake.segments() {
            if let Some(idx) = self.index_of(cell) {
                taken[idx] = true;
            }
        }
        taken
            .iter()
            .enumerate()
            .filter_map(|(idx, &t)| (!t).then(|| self.cell_at(idx)))
            .collect()
    }

    /// Move food to a uniformly chosen free cell.
    ///
    /// Fails with [`SnakeError::GridFull`] and leaves the food where it was
    /// when the body covers the whole grid.
    pub fn relocate_food(&mut self, rng: &mut fastrand::Rng) -> Result<Cell> {
        let free = self.free_cells();
        if free.is_empty() {
            return Err(SnakeError::GridFull);
        }
        self.food = free[rng.usize(..free.len())];
        Ok(self.food)
    }

    /// Apply one move.
    ///
    /// The body is only mutated when the move is legal. `Still` leaves the
    /// body in place and reports `Moved`.
    pub fn advance(&mut self, direction: Direction) -> Outcome {
        let new_head = self.head().step(direction);

        if !self.in_bounds(new_head) {
            return Outcome::Collided(Collision::Wall);
        }
        if self.snake.hits_trailing(new_head) {
            return Outcome::Collided(Collision::Body);
        }
        if direction == Direction::Still {
            return Outcome::Moved;
        }

        if new_head == self.food {
            self.snake.grow_to(new_head);
            Outcome::Ate
        } else {
            self.snake.slither_to(new_head);
            Outcome::Moved
        }
    }

    #[inline]
    fn cell_at(&self, idx: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((idx % cols) as i32, (idx / cols) as i32)
    }
}

fn check_dimensions(cols: u32, rows: u32) -> Result<()> {
    if cols == 0 || rows == 0 {
        return Err(SnakeError::InvalidGrid(format!(
            "grid must be at least 1x1, got {}x{}",
            cols, rows
        )));
    }
    // Flat cell indices are u32 and u32::MAX marks "no parent"
    if cols > i32::MAX as u32 || rows > i32::MAX as u32 || cols as u64 * rows as u64 >= NO_PARENT as u64 {
        return Err(SnakeError::InvalidGrid(format!(
            "grid {}x{} is too large",
            cols, rows
        )));
    }
    Ok(())
}

#[inline]
fn index_in(cols: u32, rows: u32, cell: Cell) -> Option<usize> {
    if cell.x < 0 || cell.y < 0 || cell.x as u32 >= cols || cell.y as u32 >= rows {
        None
    } else {
        Some(cell.y as usize * cols as usize + cell.x as usize)
    }
}

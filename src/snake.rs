use crate::world::Cell;
use std::collections::VecDeque;

/// Snake body: head at index 0, tail last, never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(64);
        body.push_back(head);
        Self { body }
    }

    /// Build a snake from head-first cells; `None` if `cells` is empty
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self {
            body: VecDeque::from(cells),
        })
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through `new` or `from_cells`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments head-first
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Segments behind the head
    pub fn trailing(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().skip(1).copied()
    }

    /// Check if any segment, head included, covers `cell`
    #[inline]
    pub fn covers(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Check if a segment behind the head covers `cell`. The head vacates on every move.
    #[inline]
    pub fn hits_trailing(&self, cell: Cell) -> bool {
        self.trailing().any(|c| c == cell)
    }

    /// Push a new head and drop the tail
    pub fn slither_to(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    /// Push a new head and keep the tail
    pub fn grow_to(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Snake {
        Snake::from_cells(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]).unwrap()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(2, 3));

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert_eq!(snake.segments().last(), Some(Cell::new(2, 3)));
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn test_trailing_excludes_head() {
        let snake = line();

        assert!(snake.covers(Cell::new(5, 5)));
        assert!(!snake.hits_trailing(Cell::new(5, 5)));
        assert!(snake.hits_trailing(Cell::new(4, 5)));
        assert!(snake.hits_trailing(Cell::new(3, 5)));
        assert!(!snake.covers(Cell::new(9, 9)));
    }

    #[test]
    fn test_slither_keeps_length() {
        let mut snake = line();

        snake.slither_to(Cell::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.segments().last(), Some(Cell::new(4, 5)));
    }

    #[test]
    fn test_grow_adds_one() {
        let mut snake = line();

        snake.grow_to(Cell::new(6, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.segments().last(), Some(Cell::new(3, 5)));
    }
}

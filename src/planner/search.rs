use crate::utils::{NO_PARENT, UNREACHED};
use crate::world::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A* over a 4-connected unit-cost grid.
///
/// Scores and back-pointers live in flat arrays indexed by `y * cols + x`.
/// Each search bumps `generation`; an entry is only valid while its stamp
/// matches, so the arrays are reused without clearing.
pub struct SearchGrid {
    cols: u32,
    rows: u32,
    g_score: Vec<u32>,
    came_from: Vec<u32>,
    /// Generation in which `g_score`/`came_from` were last written
    stamp: Vec<u32>,
    /// Generation in which the cell was marked blocked
    blocked: Vec<u32>,
    generation: u32,
    /// Min-heap on (f, h, index): lowest f first, ties go to the cell nearer the goal
    frontier: BinaryHeap<Reverse<(u32, u32, u32)>>,
    expanded: usize,
}

impl SearchGrid {
    /// Create search buffers for a `cols x rows` grid
    pub fn new(cols: u32, rows: u32) -> Self {
        let n = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            g_score: vec![UNREACHED; n],
            came_from: vec![NO_PARENT; n],
            stamp: vec![0u32; n],
            blocked: vec![0u32; n],
            generation: 0,
            frontier: BinaryHeap::with_capacity(n.min(4096)),
            expanded: 0,
        }
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Cells expanded by the most recent search
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Shortest path `[start, .., goal]` avoiding `blocked`, or `None` if the
    /// goal is unreachable (or either endpoint is off the grid).
    pub fn find_path<I>(&mut self, start: Cell, goal: Cell, blocked: I) -> Option<Vec<Cell>>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.begin();
        for cell in blocked {
            if let Some(idx) = self.index_of(cell) {
                self.blocked[idx] = self.generation;
            }
        }

        let start_idx = self.index_of(start)?;
        let goal_idx = self.index_of(goal)?;

        let h0 = start.manhattan(goal);
        self.record(start_idx, 0, NO_PARENT);
        self.frontier.push(Reverse((h0, h0, start_idx as u32)));

        while let Some(Reverse((f, h, idx))) = self.frontier.pop() {
            let idx = idx as usize;
            let g = self.g(idx);
            // Stale entry: a cheaper route to this cell was pushed later
            if g + h != f {
                continue;
            }
            if idx == goal_idx {
                return Some(self.reconstruct(idx));
            }
            self.expanded += 1;

            let tentative = g + 1;
            for neighbor in self.cell_at(idx).neighbors() {
                let Some(n_idx) = self.index_of(neighbor) else {
                    continue;
                };
                if self.blocked[n_idx] == self.generation {
                    continue;
                }
                if tentative < self.g(n_idx) {
                    self.record(n_idx, tentative, idx as u32);
                    let nh = neighbor.manhattan(goal);
                    self.frontier.push(Reverse((tentative + nh, nh, n_idx as u32)));
                }
            }
        }

        None
    }

    fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would read as current
            self.stamp.fill(0);
            self.blocked.fill(0);
            self.generation = 1;
        }
        self.frontier.clear();
        self.expanded = 0;
    }

    #[inline]
    fn g(&self, idx: usize) -> u32 {
        if self.stamp[idx] == self.generation {
            self.g_score[idx]
        } else {
            UNREACHED
        }
    }

    #[inline]
    fn record(&mut self, idx: usize, g: u32, parent: u32) {
        self.stamp[idx] = self.generation;
        self.g_score[idx] = g;
        self.came_from[idx] = parent;
    }

    fn reconstruct(&self, goal_idx: usize) -> Vec<Cell> {
        let mut path = Vec::with_capacity(self.g_score[goal_idx] as usize + 1);
        let mut idx = goal_idx as u32;
        while idx != NO_PARENT {
            path.push(self.cell_at(idx as usize));
            idx = self.came_from[idx as usize];
        }
        path.reverse();
        path
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x as u32 >= self.cols || cell.y as u32 >= self.rows {
            None
        } else {
            Some(cell.y as usize * self.cols as usize + cell.x as usize)
        }
    }

    #[inline]
    fn cell_at(&self, idx: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((idx % cols) as i32, (idx / cols) as i32)
    }
}

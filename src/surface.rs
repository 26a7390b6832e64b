use crate::error::{Result, SnakeError};
use crate::world::{Cell, GridWorld};
use colored::Colorize;
use std::fmt;

/// What a grid cell is filled with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Food,
    Body,
}

/// Anything a frame can be drawn onto
pub trait Surface {
    /// Wipe the whole surface to background
    fn clear(&mut self);

    /// Fill the rect of grid cell `cell`
    fn fill_cell(&mut self, cell: Cell, paint: Paint);
}

/// Draw one frame: background, then food, then every body segment
pub fn draw<S: Surface + ?Sized>(world: &GridWorld, surface: &mut S) {
    surface.clear();
    surface.fill_cell(world.food(), Paint::Food);
    for segment in world.snake().segments() {
        surface.fill_cell(segment, Paint::Body);
    }
}

/// Grid dimensions that fit a drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    /// Whole cells that fit inside `width x height` pixels after `padding` on each side
    pub fn from_surface(width: u32, height: u32, cell_size: u32, padding: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(SnakeError::InvalidGrid("cell size must be positive".to_string()));
        }
        let cols = width.saturating_sub(2 * padding) / cell_size;
        let rows = height.saturating_sub(2 * padding) / cell_size;
        if cols == 0 || rows == 0 {
            return Err(SnakeError::InvalidGrid(format!(
                "a {}x{} surface holds no {}px cells",
                width, height, cell_size
            )));
        }
        Ok(Self { cols, rows })
    }
}

/// One character per cell, printed to the terminal
#[derive(Clone, Debug)]
pub struct TextSurface {
    cols: u32,
    rows: u32,
    cells: Vec<Option<Paint>>,
}

impl TextSurface {
    const EMPTY: char = '.';
    const FOOD: char = 'O';
    const BODY: char = '#';

    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Surface sized for `world`
    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.cols(), world.rows())
    }

    /// Plain rows without colour codes
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|&paint| Self::glyph(paint)).collect())
            .collect()
    }

    #[inline]
    fn glyph(paint: Option<Paint>) -> char {
        match paint {
            None => Self::EMPTY,
            Some(Paint::Food) => Self::FOOD,
            Some(Paint::Body) => Self::BODY,
        }
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_cell(&mut self, cell: Cell, paint: Paint) {
        if cell.x < 0 || cell.y < 0 || cell.x as u32 >= self.cols || cell.y as u32 >= self.rows {
            return;
        }
        let idx = cell.y as usize * self.cols as usize + cell.x as usize;
        self.cells[idx] = Some(paint);
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for &paint in row {
                let glyph = Self::glyph(paint).to_string();
                match paint {
                    None => write!(f, "{}", glyph.dimmed())?,
                    Some(Paint::Food) => write!(f, "{}", glyph.red().bold())?,
                    Some(Paint::Body) => write!(f, "{}", glyph.green())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

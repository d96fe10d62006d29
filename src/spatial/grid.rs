//! Rectangular maze grid with symmetric wall bookkeeping
//!
//! Cells are stored row-major, so index `row * width + col` addresses the cell
//! at `(col, row)`. Every wall mutation goes through [`MazeGrid::remove_wall`]
//! or [`MazeGrid::insert_wall`], which update both sides of the shared wall.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_configuration};
use crate::io::template::{Template, TemplateCell};
use crate::spatial::cell::{Cell, CellState, Direction};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use std::time::Duration;

/// Grid of maze cells plus the metadata of the last generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Option<usize>,
    end: Option<usize>,
    seed: u64,
    generation_time: Duration,
}

impl MazeGrid {
    /// Allocate a grid with every cell walled in and no start or end chosen
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, exceeds the maximum grid
    /// dimension, or the cell count overflows
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = |reason: &str| MazeError::InvalidDimensions {
            width,
            height,
            reason: reason.to_string(),
        };
        if width < 1 || height < 1 {
            return Err(invalid("width and height must be at least 1"));
        }
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(invalid(&format!(
                "dimensions may not exceed {MAX_GRID_DIMENSION}"
            )));
        }
        let cell_count = width
            .checked_mul(height)
            .ok_or_else(|| invalid("the maze's size was too big"))?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); cell_count],
            start: None,
            end: None,
            seed: 0,
            generation_time: Duration::ZERO,
        })
    }

    /// Allocate a grid shaped by a template classification
    ///
    /// Excluded template cells become excluded maze cells. The start and end
    /// cells are drawn uniformly from the start and end candidates using `seed`;
    /// without candidates the top-left and bottom-right cells are used.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The template dimensions are invalid
    /// - No start candidate exists and the top-left cell is excluded
    /// - No end candidate exists and the bottom-right cell is excluded
    pub fn from_template(template: &Template, seed: u64) -> Result<Self> {
        let mut grid = Self::new(template.width(), template.height())?;

        let mut start_candidates = Vec::new();
        let mut end_candidates = Vec::new();
        for (index, role) in template.iter().enumerate() {
            match role {
                TemplateCell::Normal => {}
                TemplateCell::Excluded => {
                    if let Some(cell) = grid.cells.get_mut(index) {
                        *cell = Cell::excluded();
                    }
                }
                TemplateCell::StartCandidate => start_candidates.push(index),
                TemplateCell::EndCandidate => end_candidates.push(index),
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let start = match pick_candidate(&start_candidates, &mut rng) {
            Some(index) => index,
            None if grid.is_excluded(0) => {
                return Err(invalid_configuration(
                    &"no possible start locations marked, and the top-left cell is excluded",
                ));
            }
            None => 0,
        };
        let last = grid.cell_count() - 1;
        let end = match pick_candidate(&end_candidates, &mut rng) {
            Some(index) => index,
            None if grid.is_excluded(last) => {
                return Err(invalid_configuration(
                    &"no possible end locations marked, and the bottom-right cell is excluded",
                ));
            }
            None => last,
        };
        grid.start = Some(start);
        grid.end = Some(end);
        Ok(grid)
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a flat index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell at a column and row
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&Cell> {
        self.index_of(col, row).and_then(|index| self.cells.get(index))
    }

    /// Flat index of a column and row, if in bounds
    pub const fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Column and row of a flat index
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Index of the adjacent cell in a direction, if it exists
    pub const fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        if index >= self.cells.len() {
            return None;
        }
        let (col, row) = self.coords(index);
        let (dx, dy) = direction.offset();
        let (Some(next_col), Some(next_row)) =
            (col.checked_add_signed(dx), row.checked_add_signed(dy))
        else {
            return None;
        };
        self.index_of(next_col, next_row)
    }

    /// Whether the cell at `index` is excluded; out-of-bounds counts as excluded
    pub fn is_excluded(&self, index: usize) -> bool {
        self.cells.get(index).is_none_or(Cell::is_excluded)
    }

    /// Whether the wall on one side of a cell is present; out-of-bounds counts as walled
    pub fn has_wall(&self, index: usize, direction: Direction) -> bool {
        self.cells
            .get(index)
            .is_none_or(|cell| cell.has_wall(direction))
    }

    /// Clear the wall between a cell and its neighbor on both sides
    ///
    /// Returns `true` if a wall was removed. Boundary walls and walls of excluded
    /// cells are never removed.
    pub fn remove_wall(&mut self, index: usize, direction: Direction) -> bool {
        self.set_shared_wall(index, direction, false)
    }

    /// Restore the wall between a cell and its neighbor on both sides
    ///
    /// Returns `true` if a wall was added. Excluded cells are left untouched.
    pub fn insert_wall(&mut self, index: usize, direction: Direction) -> bool {
        self.set_shared_wall(index, direction, true)
    }

    fn set_shared_wall(&mut self, index: usize, direction: Direction, present: bool) -> bool {
        let Some(other) = self.neighbor(index, direction) else {
            return false;
        };
        if self.is_excluded(index) || self.is_excluded(other) {
            return false;
        }
        if self.has_wall(index, direction) == present {
            return false;
        }
        if let Some(cell) = self.cells.get_mut(index) {
            cell.set_wall(direction, present);
        }
        if let Some(cell) = self.cells.get_mut(other) {
            cell.set_wall(direction.opposite(), present);
        }
        true
    }

    /// Start cell index, once chosen
    pub const fn start(&self) -> Option<usize> {
        self.start
    }

    /// End cell index, once chosen
    pub const fn end(&self) -> Option<usize> {
        self.end
    }

    /// Start cell column and row, once chosen
    pub fn start_coords(&self) -> Option<(usize, usize)> {
        self.start.map(|index| self.coords(index))
    }

    /// End cell column and row, once chosen
    pub fn end_coords(&self) -> Option<(usize, usize)> {
        self.end.map(|index| self.coords(index))
    }

    /// Choose the start and end cells explicitly
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds or excluded
    pub fn set_endpoints(&mut self, start: usize, end: usize) -> Result<()> {
        for (name, index) in [("start", start), ("end", end)] {
            if self.is_excluded(index) {
                return Err(invalid_configuration(&format!(
                    "{name} cell {index} is excluded or outside the {}x{} grid",
                    self.width, self.height
                )));
            }
        }
        self.start = Some(start);
        self.end = Some(end);
        Ok(())
    }

    /// Seed used by the last generation run
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Wall-clock duration of the last generation run
    pub const fn generation_time(&self) -> Duration {
        self.generation_time
    }

    /// Human-readable description of the maze and its last generation run
    pub fn summary(&self) -> String {
        format!(
            "{}x{} grid maze with random seed {}, generated in {:.3} seconds",
            self.width,
            self.height,
            self.seed,
            self.generation_time.as_secs_f64()
        )
    }

    /// Number of cells currently marked as part of the solution
    pub fn solution_len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_on_path()).count()
    }

    /// Replace every cell and the generation metadata in one step
    ///
    /// Cell count must match; generation builds the replacement on a copy so a
    /// failed run leaves the grid unchanged.
    pub(crate) fn commit_generation(
        &mut self,
        cells: Vec<Cell>,
        endpoints: (usize, usize),
        seed: u64,
        generation_time: Duration,
    ) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
        self.start = Some(endpoints.0);
        self.end = Some(endpoints.1);
        self.seed = seed;
        self.generation_time = generation_time;
    }

    pub(crate) fn set_state(&mut self, index: usize, state: CellState) {
        if let Some(cell) = self.cells.get_mut(index)
            && !cell.is_excluded()
        {
            cell.set_state(state);
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn pick_candidate(candidates: &[usize], rng: &mut StdRng) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    candidates
        .get(rng.random_range(0..candidates.len()))
        .copied()
}

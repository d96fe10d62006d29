//! Start and end arrows drawn over a rendered maze
//!
//! Each arrow is an outlined sprite: a colored arrow with a white arrow of half
//! the size inset by a quarter of its length. Sprites are clipped to the base
//! raster.

use crate::algorithm::solver::endpoint_directions;
use crate::io::configuration::{
    ARROW_LENGTH, END_ARROW_COLOR, FLOOR_COLOR, START_ARROW_COLOR,
};
use crate::io::error::{Result, invalid_configuration};
use crate::render::{Bordered, MazeRaster, Raster};
use crate::spatial::cell::Direction;
use crate::spatial::grid::MazeGrid;
use image::Rgba;

/// Which end of the arrow sits on its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The arrow points at the anchor
    Tip,
    /// The arrow starts at the anchor and points away
    Tail,
}

/// Outlined arrow sprite in a square of side `length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    /// Direction the arrow points in
    pub direction: Direction,
    /// Side of the square sprite in pixels
    pub length: u32,
    /// Outline color
    pub color: Rgba<u8>,
}

/// Whether `(x, y)` lies on a solid arrow of side `length` pointing in `direction`
pub fn arrow_mask(direction: Direction, length: u32, x: u32, y: u32) -> bool {
    if length == 0 || x >= length || y >= length {
        return false;
    }
    let last = length - 1;
    // Rotate into the frame of an arrow pointing right
    let (along, across) = match direction {
        Direction::Right => (x, y),
        Direction::Left => (last - x, y),
        Direction::Down => (y, x),
        Direction::Up => (last - y, x),
    };
    // Distances are doubled to keep the center on the integer grid
    let off_center = (2 * across).abs_diff(last);
    if along >= length / 2 {
        off_center <= 2 * (last - along)
    } else {
        off_center <= length / 3
    }
}

impl Arrow {
    /// Color of the sprite pixel at `(x, y)`, if painted
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let inset = self.length / 4;
        let inner_length = self.length / 2;
        let on_inner = x
            .checked_sub(inset)
            .zip(y.checked_sub(inset))
            .is_some_and(|(ix, iy)| arrow_mask(self.direction, inner_length, ix, iy));
        if on_inner {
            return Some(FLOOR_COLOR);
        }
        arrow_mask(self.direction, self.length, x, y).then_some(self.color)
    }

    /// Top-left corner of the sprite so that `anchor` sits at `point`
    pub fn top_left(&self, point: (i64, i64), anchor: Anchor) -> (i64, i64) {
        let length = i64::from(self.length);
        let half = length / 2;
        let (x, y) = point;
        match (self.direction, anchor) {
            (Direction::Left, Anchor::Tail) => (x - length - 1, y - half),
            (Direction::Left, Anchor::Tip) => (x + 1, y - half),
            (Direction::Up, Anchor::Tail) => (x - half, y - length - 1),
            (Direction::Up, Anchor::Tip) => (x - half, y + 1),
            (Direction::Right, Anchor::Tail) => (x + 1, y - half),
            (Direction::Right, Anchor::Tip) => (x - length - 1, y - half),
            (Direction::Down, Anchor::Tail) => (x - half, y + 1),
            (Direction::Down, Anchor::Tip) => (x - half, y - length - 1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PlacedArrow {
    arrow: Arrow,
    origin: (i64, i64),
}

/// Composites arrow sprites over a base raster; later arrows paint on top
#[derive(Debug, Clone)]
pub struct ArrowOverlay<R> {
    base: R,
    arrows: Vec<PlacedArrow>,
}

impl<R: Raster> ArrowOverlay<R> {
    /// Overlay with no arrows yet
    pub const fn new(base: R) -> Self {
        Self {
            base,
            arrows: Vec::new(),
        }
    }

    /// Place an arrow so that its `anchor` end sits at `point`
    pub fn add_arrow(&mut self, arrow: Arrow, point: (i64, i64), anchor: Anchor) {
        self.arrows.push(PlacedArrow {
            arrow,
            origin: arrow.top_left(point, anchor),
        });
    }

    /// Number of arrows placed
    pub fn arrow_count(&self) -> usize {
        self.arrows.len()
    }
}

impl<R: Raster> Raster for ArrowOverlay<R> {
    fn dimensions(&self) -> (u32, u32) {
        self.base.dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        self.arrows
            .iter()
            .rev()
            .find_map(|placed| {
                let local_x = u32::try_from(i64::from(x) - placed.origin.0).ok()?;
                let local_y = u32::try_from(i64::from(y) - placed.origin.1).ok()?;
                placed.arrow.pixel(local_x, local_y)
            })
            .or_else(|| self.base.pixel(x, y))
    }
}

/// Arrow side length for a given cell width: never under half a cell
pub fn arrow_length(cell_pixels: u32) -> u32 {
    ARROW_LENGTH.max(cell_pixels / 2)
}

/// Render a maze with a white margin and arrows marking its start and end
///
/// The margin is wide enough for an arrow plus `border` extra pixels. The start
/// arrow points along the first step of the solution with its tip on the start
/// cell's center; the end arrow leaves the end cell's center along the last step.
///
/// # Errors
///
/// Returns an error if the cell width is invalid or the maze cannot be solved
pub fn with_endpoint_arrows(
    grid: &MazeGrid,
    cell_pixels: u32,
    border: u32,
) -> Result<ArrowOverlay<Bordered<MazeRaster<'_>>>> {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        return Err(invalid_configuration(
            &"the maze must be generated before it can be decorated",
        ));
    };
    let length = arrow_length(cell_pixels);
    let margin = length.saturating_add(1).saturating_add(border);
    let maze = MazeRaster::new(grid, cell_pixels)?;
    let directions = endpoint_directions(grid)?;

    let anchor_point = |index: usize| {
        let (x, y) = maze.cell_center(index);
        (i64::from(x) + i64::from(margin), i64::from(y) + i64::from(margin))
    };
    let start_point = anchor_point(start);
    let end_point = anchor_point(end);

    let mut overlay = ArrowOverlay::new(Bordered::new(maze, margin, FLOOR_COLOR));
    overlay.add_arrow(
        Arrow {
            direction: directions.start,
            length,
            color: START_ARROW_COLOR,
        },
        start_point,
        Anchor::Tip,
    );
    overlay.add_arrow(
        Arrow {
            direction: directions.end,
            length,
            color: END_ARROW_COLOR,
        },
        end_point,
        Anchor::Tail,
    );
    Ok(overlay)
}

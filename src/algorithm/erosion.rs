//! Removal of dangling wall stubs at interior corners
//!
//! Four wall segments meet at the bottom-right corner of every cell outside
//! the last row and column. A corner touched by exactly one segment holds a
//! stub sticking out into open space, and that segment is cleared. Corners are
//! judged against a snapshot taken before the pass, so one call never clears a
//! wall because of another wall cleared in the same call.

use crate::spatial::cell::{Cell, Direction};
use crate::spatial::grid::MazeGrid;
use log::debug;

/// Run one erosion pass and return the number of wall segments removed
///
/// Blocks that touch an excluded cell are skipped, so excluded cells keep
/// their walls and stay sealed off.
pub fn erode(grid: &mut MazeGrid) -> usize {
    let snapshot: Vec<Cell> = grid.cells().to_vec();
    let width = grid.width();
    let height = grid.height();
    let mut removed = 0;

    for row in 0..height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let top_left = row * width + col;
            let top_right = top_left + 1;
            let bottom_left = top_left + width;
            let bottom_right = bottom_left + 1;

            let block = [top_left, top_right, bottom_left, bottom_right];
            if block
                .iter()
                .any(|&index| snapshot.get(index).is_none_or(Cell::is_excluded))
            {
                continue;
            }

            // Segments meeting at the shared corner, as seen from the two
            // diagonal cells
            let segments = [
                (top_left, Direction::Right),
                (top_left, Direction::Down),
                (bottom_right, Direction::Left),
                (bottom_right, Direction::Up),
            ];
            let mut present = segments.iter().filter(|&&(index, direction)| {
                snapshot
                    .get(index)
                    .is_some_and(|cell| cell.has_wall(direction))
            });

            let (Some(&(index, direction)), None) = (present.next(), present.next()) else {
                continue;
            };
            if grid.remove_wall(index, direction) {
                removed += 1;
            }
        }
    }

    debug!("erosion pass removed {removed} wall segments");
    removed
}

/// Count interior corners touched by exactly one wall segment
///
/// Blocks touching excluded cells are ignored, matching [`erode`].
pub fn dangling_stubs(grid: &MazeGrid) -> usize {
    let width = grid.width();
    let height = grid.height();
    let mut stubs = 0;

    for row in 0..height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let top_left = row * width + col;
            let bottom_right = top_left + width + 1;
            if [top_left, top_left + 1, top_left + width, bottom_right]
                .iter()
                .any(|&index| grid.is_excluded(index))
            {
                continue;
            }
            let count = [
                grid.has_wall(top_left, Direction::Right),
                grid.has_wall(top_left, Direction::Down),
                grid.has_wall(bottom_right, Direction::Left),
                grid.has_wall(bottom_right, Direction::Up),
            ]
            .iter()
            .filter(|&&wall| wall)
            .count();
            if count == 1 {
                stubs += 1;
            }
        }
    }
    stubs
}

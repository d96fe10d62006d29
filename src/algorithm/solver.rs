//! Greedy depth-first search from the start cell to the end cell
//!
//! At every step the four directions are ranked by how much they shrink the
//! Manhattan distance to the end cell. The search follows the best open move
//! as far as it can and stacks the other open moves for later, so the result
//! is a valid path but not necessarily the shortest one.

use crate::io::error::{Result, internal_error, invalid_configuration};
use crate::spatial::cell::{CellState, Direction};
use crate::spatial::grid::MazeGrid;
use bitvec::prelude::*;
use log::debug;

/// Directions ordered from most to least promising for reaching `target`
///
/// The axis with the larger remaining offset supplies the best and the worst
/// move; the other axis fills the middle. Ties in offset favor the horizontal
/// axis, and a zero offset on an axis favors left or up.
pub const fn direction_ranking(current: (usize, usize), target: (usize, usize)) -> [Direction; 4] {
    let col_diff = target.0 as isize - current.0 as isize;
    let row_diff = target.1 as isize - current.1 as isize;

    let (toward_col, away_col) = if col_diff > 0 {
        (Direction::Right, Direction::Left)
    } else {
        (Direction::Left, Direction::Right)
    };
    let (toward_row, away_row) = if row_diff > 0 {
        (Direction::Down, Direction::Up)
    } else {
        (Direction::Up, Direction::Down)
    };

    if row_diff.abs() > col_diff.abs() {
        [toward_row, toward_col, away_col, away_row]
    } else {
        [toward_col, toward_row, away_row, away_col]
    }
}

fn is_visited(visited: &BitSlice, index: usize) -> bool {
    visited.get(index).as_deref() != Some(&false)
}

/// Neighbor reachable through an open wall that has not been visited yet
fn open_unvisited(
    grid: &MazeGrid,
    index: usize,
    direction: Direction,
    visited: &BitSlice,
) -> Option<usize> {
    if grid.has_wall(index, direction) {
        return None;
    }
    grid.neighbor(index, direction)
        .filter(|&next| !is_visited(visited, next))
}

/// Search for a path and return its cell indices from start to end
///
/// The grid is not modified.
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no start or end cell, or either is excluded
/// - The search exhausts its stack without reaching the end (internal error)
pub fn find_path(grid: &MazeGrid) -> Result<Vec<usize>> {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        return Err(invalid_configuration(
            &"the maze must be generated before it can be solved",
        ));
    };
    if grid.is_excluded(start) || grid.is_excluded(end) {
        return Err(invalid_configuration(
            &"the start and end cells must be part of the maze",
        ));
    }
    let target = grid.coords(end);

    // Excluded cells count as visited so the search never enters them
    let mut visited: BitVec = grid.cells().iter().map(|cell| cell.is_excluded()).collect();
    let mut parents: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut stack = Vec::with_capacity(grid.cell_count() / 2);
    stack.push(start);
    visited.set(start, true);

    'search: loop {
        let Some(mut current) = stack.pop() else {
            return Err(internal_error(
                "path search",
                &"failed to solve maze: the end cell is unreachable",
            ));
        };
        if current == end {
            break;
        }

        // Follow the most promising path as far as possible
        loop {
            let mut next_step = None;
            for direction in direction_ranking(grid.coords(current), target) {
                let Some(next) = open_unvisited(grid, current, direction, &visited) else {
                    continue;
                };
                visited.set(next, true);
                if let Some(parent) = parents.get_mut(next) {
                    *parent = Some(current);
                }
                if next_step.is_none() {
                    next_step = Some(next);
                } else {
                    stack.push(next);
                }
            }

            let Some(next) = next_step else {
                break;
            };
            current = next;
            if current == end {
                break 'search;
            }
        }
    }

    let mut path = vec![end];
    let mut index = end;
    while let Some(parent) = parents.get(index).copied().flatten() {
        path.push(parent);
        index = parent;
    }
    path.reverse();
    Ok(path)
}

/// Remove every solution marking; excluded cells are untouched
pub fn clear_solution(grid: &mut MazeGrid) {
    for index in 0..grid.cell_count() {
        if grid.cell(index).is_some_and(|cell| cell.is_on_path()) {
            grid.set_state(index, CellState::Normal);
        }
    }
}

/// Show or hide the solution path
///
/// With `highlight` set, any previous marking is cleared and the cells of a
/// freshly found path are marked. Returns the number of marked cells.
///
/// # Errors
///
/// Returns an error if the path search fails; see [`find_path`]
pub fn solve(grid: &mut MazeGrid, highlight: bool) -> Result<usize> {
    clear_solution(grid);
    if !highlight {
        return Ok(0);
    }
    let path = find_path(grid)?;
    for &index in &path {
        grid.set_state(index, CellState::SolutionPath);
    }
    debug!("solution path covers {} cells", path.len());
    Ok(path.len())
}

/// Directions for the start and end markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDirections {
    /// Direction of the first step out of the start cell
    pub start: Direction,
    /// Direction of the last step into the end cell
    pub end: Direction,
}

/// Direction of the step between two adjacent cells
fn step_direction(grid: &MazeGrid, from: usize, to: usize) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| grid.neighbor(from, direction) == Some(to))
}

/// Derive the start and end marker directions from the solution path
///
/// A single-cell path points right at both ends.
///
/// # Errors
///
/// Returns an error if the path search fails; see [`find_path`]
pub fn endpoint_directions(grid: &MazeGrid) -> Result<EndpointDirections> {
    let path = find_path(grid)?;
    let first = path
        .first()
        .zip(path.get(1))
        .and_then(|(&a, &b)| step_direction(grid, a, b));
    let last = path
        .len()
        .checked_sub(2)
        .and_then(|i| path.get(i).zip(path.get(i + 1)))
        .and_then(|(&a, &b)| step_direction(grid, a, b));
    Ok(EndpointDirections {
        start: first.unwrap_or(Direction::Right),
        end: last.unwrap_or(Direction::Right),
    })
}

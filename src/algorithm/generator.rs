//! Randomized edge contraction over a union-find forest
//!
//! Every right/down adjacency between two non-excluded cells starts in a
//! working list. Random picks join cells that are still in different sets; a
//! pick that lands on an already-joined pair triggers a sweep that drops every
//! joined pair, so the next pick always succeeds.

use crate::algorithm::disjoint_set::DisjointSet;
use crate::io::error::{Result, internal_error, invalid_configuration};
use crate::io::template::Template;
use crate::spatial::cell::{Cell, Direction};
use crate::spatial::grid::MazeGrid;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Adjacent pair of cells that may still be joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborPair {
    /// Index of the upper or left cell
    pub base: usize,
    /// Either [`Direction::Right`] or [`Direction::Down`]
    pub direction: Direction,
}

impl NeighborPair {
    /// Index of the second cell of the pair
    ///
    /// # Errors
    ///
    /// Returns an internal error if the direction is not right or down
    pub fn neighbor_index(&self, width: usize) -> Result<usize> {
        match self.direction {
            Direction::Right => Ok(self.base + 1),
            Direction::Down => Ok(self.base + width),
            other => Err(internal_error(
                "neighbor pair decoding",
                &format!("neighbor {other} of cell {} is not below or to the right", self.base),
            )),
        }
    }
}

/// Statistics of a single generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Size of the neighbor-pair list before the first pick
    pub initial_pairs: usize,
    /// Walls cleared, one per successful pick
    pub walls_removed: usize,
    /// Picks that landed on an already-joined pair
    pub wasted_picks: usize,
    /// Sweeps that dropped joined pairs from the list
    pub compactions: usize,
}

/// Seed to use when none is given: nanoseconds since the Unix epoch
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(1, |elapsed| elapsed.as_nanos() as u64)
    })
}

/// Every right/down adjacency between two non-excluded cells of `cells`
pub fn initial_neighbor_pairs(cells: &[Cell], width: usize, height: usize) -> Vec<NeighborPair> {
    let capacity = width.saturating_sub(1) * height + height.saturating_sub(1) * width;
    let mut pairs = Vec::with_capacity(capacity);
    let is_open = |index: usize| cells.get(index).is_some_and(|cell| !cell.is_excluded());

    for row in 0..height {
        for col in 0..width {
            let index = row * width + col;
            // Excluded cells are never joined to anything
            if !is_open(index) {
                continue;
            }
            if col + 1 < width && is_open(index + 1) {
                pairs.push(NeighborPair {
                    base: index,
                    direction: Direction::Right,
                });
            }
            if row + 1 < height && is_open(index + width) {
                pairs.push(NeighborPair {
                    base: index,
                    direction: Direction::Down,
                });
            }
        }
    }
    pairs
}

/// Drop every pair whose cells are already in the same set
fn compact_pairs(pairs: &mut Vec<NeighborPair>, sets: &mut DisjointSet, width: usize) -> Result<()> {
    let mut i = 0;
    while let Some(pair) = pairs.get(i).copied() {
        let other = pair.neighbor_index(width)?;
        if sets.connected(pair.base, other) {
            pairs.swap_remove(i);
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Build a spanning tree over every region of non-excluded cells
///
/// Walls of non-excluded cells are reset first, so the result depends only on
/// the grid dimensions, its exclusion mask and `seed`. Unset endpoints default
/// to the first and last cell. The new layout is built on a copy and committed
/// only on success.
///
/// # Errors
///
/// Returns an error if:
/// - The start or end cell is excluded
/// - Exclusions leave the start and end cells in separate regions
/// - A neighbor pair decodes to an invalid direction (internal error)
pub fn generate(grid: &mut MazeGrid, seed: u64) -> Result<GenerationReport> {
    let width = grid.width();
    let height = grid.height();
    let start = grid.start().unwrap_or(0);
    let end = grid.end().unwrap_or(grid.cell_count() - 1);
    for (name, index) in [("start", start), ("end", end)] {
        if grid.is_excluded(index) {
            return Err(invalid_configuration(&format!(
                "the {name} cell {index} is excluded from the maze"
            )));
        }
    }

    let mut cells = grid.cells().to_vec();
    for cell in cells.iter_mut().filter(|cell| !cell.is_excluded()) {
        cell.reset_walls();
    }
    let mut sets = DisjointSet::new(cells.len());
    let mut pairs = initial_neighbor_pairs(&cells, width, height);
    let mut report = GenerationReport {
        initial_pairs: pairs.len(),
        ..GenerationReport::default()
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let start_time = Instant::now();

    while !pairs.is_empty() {
        let pick = rng.random_range(0..pairs.len());
        let Some(pair) = pairs.get(pick).copied() else {
            break;
        };
        let other = pair.neighbor_index(width)?;
        if sets.connected(pair.base, other) {
            report.wasted_picks += 1;
            compact_pairs(&mut pairs, &mut sets, width)?;
            report.compactions += 1;
            continue;
        }

        if let Some(cell) = cells.get_mut(pair.base) {
            cell.set_wall(pair.direction, false);
        }
        if let Some(cell) = cells.get_mut(other) {
            cell.set_wall(pair.direction.opposite(), false);
        }
        sets.union(pair.base, other);
        report.walls_removed += 1;
    }

    let generation_time = start_time.elapsed();

    if !sets.connected(start, end) {
        let (start_col, start_row) = grid.coords(start);
        let (end_col, end_row) = grid.coords(end);
        return Err(invalid_configuration(&format!(
            "start ({start_col}, {start_row}) and end ({end_col}, {end_row}) are separated by excluded cells"
        )));
    }

    grid.commit_generation(cells, (start, end), seed, generation_time);
    debug!(
        "generated {width}x{height} maze: {} pairs, {} walls removed, {} wasted picks, {} compactions",
        report.initial_pairs, report.walls_removed, report.wasted_picks, report.compactions
    );
    Ok(report)
}

/// Allocate and generate a plain rectangular maze
///
/// # Errors
///
/// Returns an error if the dimensions are invalid
pub fn generate_with_seed(width: usize, height: usize, seed: Option<u64>) -> Result<MazeGrid> {
    let mut grid = MazeGrid::new(width, height)?;
    generate(&mut grid, resolve_seed(seed))?;
    Ok(grid)
}

/// Allocate and generate a maze shaped by a template
///
/// The same seed drives start/end candidate selection and generation.
///
/// # Errors
///
/// Returns an error if the template yields no usable start or end, or its
/// start and end are separated by excluded cells
pub fn generate_from_template(template: &Template, seed: Option<u64>) -> Result<MazeGrid> {
    let seed = resolve_seed(seed);
    let mut grid = MazeGrid::from_template(template, seed)?;
    generate(&mut grid, seed)?;
    Ok(grid)
}

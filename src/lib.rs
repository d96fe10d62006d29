//! Perfect maze generation over a rectangular grid of cells
//!
//! A union-find spanning-tree generator carves the maze, an optional erosion
//! pass trims dangling wall stubs, and a greedy depth-first search marks one
//! solution path. Template images can shape the maze and rendering adapters
//! turn the grid into PNG images.

#![forbid(unsafe_code)]

/// Maze topology algorithms: union-find, generation, erosion and solving
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Raster adapters that draw a grid as pixels
pub mod render;
/// Cell and grid data structures
pub mod spatial;

pub use io::error::{MazeError, Result};
pub use spatial::{Cell, CellState, Direction, MazeGrid};

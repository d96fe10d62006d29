//! Spatial data structures for the maze
//!
//! This module contains:
//! - Cell walls, directions and state markers
//! - The maze grid with symmetric wall updates and index arithmetic

/// Cell, wall and direction primitives
pub mod cell;
/// Maze grid storage and coordinate arithmetic
pub mod grid;

pub use cell::{Cell, CellState, Corner, Direction};
pub use grid::MazeGrid;

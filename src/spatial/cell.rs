//! Cell, wall and direction primitives shared by every maze stage

use std::fmt;

/// Cardinal direction between adjacent cells
///
/// The declaration order (left, up, right, down) doubles as the wall slot
/// order of a [`Cell`], so `index` and the opposite direction are two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards column - 1
    Left,
    /// Towards row - 1
    Up,
    /// Towards column + 1
    Right,
    /// Towards row + 1
    Down,
}

impl Direction {
    /// All directions in wall slot order
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Wall slot index (0 = left, 1 = up, 2 = right, 3 = down)
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// The direction pointing back across the same wall
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Column and row deltas of one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        };
        write!(f, "{name}")
    }
}

/// Role of a cell beyond its walls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Regular maze cell
    #[default]
    Normal,
    /// Cell lies on the highlighted solution path
    SolutionPath,
    /// Cell is not part of the maze; its walls never change
    Excluded,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::SolutionPath => "solutionPath",
            Self::Excluded => "excluded",
        };
        write!(f, "{name}")
    }
}

/// Corner of a single cell, clockwise from the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Where the left and top walls meet
    TopLeft,
    /// Where the top and right walls meet
    TopRight,
    /// Where the right and bottom walls meet
    BottomRight,
    /// Where the bottom and left walls meet
    BottomLeft,
}

impl Corner {
    /// The two walls meeting at this corner
    pub const fn walls(self) -> (Direction, Direction) {
        match self {
            Self::TopLeft => (Direction::Left, Direction::Up),
            Self::TopRight => (Direction::Up, Direction::Right),
            Self::BottomRight => (Direction::Right, Direction::Down),
            Self::BottomLeft => (Direction::Down, Direction::Left),
        }
    }
}

/// One grid position: four wall flags plus a state marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    state: CellState,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// A normal cell with all four walls present
    pub const fn new() -> Self {
        Self {
            walls: [true; 4],
            state: CellState::Normal,
        }
    }

    /// A walled-in cell that is not part of the maze
    pub const fn excluded() -> Self {
        Self {
            walls: [true; 4],
            state: CellState::Excluded,
        }
    }

    /// Wall flags in slot order (left, up, right, down)
    pub const fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Whether the wall on the given side is present
    pub const fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.walls[0],
            Direction::Up => self.walls[1],
            Direction::Right => self.walls[2],
            Direction::Down => self.walls[3],
        }
    }

    /// Number of walls present
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    /// Current state marker
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Whether the cell is excluded from the maze
    pub const fn is_excluded(&self) -> bool {
        matches!(self.state, CellState::Excluded)
    }

    /// Whether the cell is marked as part of the solution
    pub const fn is_on_path(&self) -> bool {
        matches!(self.state, CellState::SolutionPath)
    }

    /// Whether a corner pixel should be drawn: false only if both adjacent walls are clear
    pub const fn corner_set(&self, corner: Corner) -> bool {
        let (first, second) = corner.walls();
        self.has_wall(first) || self.has_wall(second)
    }

    pub(crate) const fn set_wall(&mut self, direction: Direction, present: bool) {
        let slot = match direction {
            Direction::Left => &mut self.walls[0],
            Direction::Up => &mut self.walls[1],
            Direction::Right => &mut self.walls[2],
            Direction::Down => &mut self.walls[3],
        };
        *slot = present;
    }

    pub(crate) const fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) const fn reset_walls(&mut self) {
        self.walls = [true; 4];
    }
}

//! Core domain types for a round of noughts and crosses.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display)]
pub enum Side {
    /// The person at the keyboard (plays first, marks `X`).
    #[display("human")]
    Human,
    /// The random computer opponent (marks `O`).
    #[display("computer")]
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Mark this side writes on the board.
    pub fn mark(self) -> char {
        match self {
            Side::Human => 'X',
            Side::Computer => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the given side's mark.
    Marked(Side),
}

impl Cell {
    /// Character used when printing the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(side) => side.mark(),
        }
    }
}

/// Zero-based (row, column) coordinate of a cell that is known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Board edge length.
    pub const SIZE: usize = 3;

    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Returns the coordinate if both parts are within `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Self::SIZE && col < Self::SIZE).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIZE + self.col
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Gets the cell at raw row/column indices, `None` when off the board.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        Coord::new(row, col).map(|coord| self.get(coord))
    }

    /// Checks if the cell at a coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(Coord::SIZE)
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

/// Outcome of the round being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves are still being made.
    #[default]
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// The board filled up with no line.
    Draw,
}

impl RoundOutcome {
    /// True once the round has ended.
    pub fn is_terminal(self) -> bool {
        self != RoundOutcome::InProgress
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(side),
            RoundOutcome::InProgress | RoundOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "in progress"),
            RoundOutcome::Won(side) => write!(f, "{side} won"),
            RoundOutcome::Draw => write!(f, "draw"),
        }
    }
}

//! Line detection.

use crate::types::{Board, Cell, Coord, Side};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Coord {
    Coord::ALL[row * Coord::SIZE + col]
}

/// The eight winning lines.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the side holding three in a row, if any.
#[instrument(skip(board), level = "trace")]
pub fn check_winner(board: &Board) -> Option<Side> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Marked(side) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(side)
        }
        _ => None,
    })
}

//! Moves and move rejections.
//!
//! A move is a domain event: which side marked which cell. Rejections are
//! values too, so the caller can report them and ask again without the
//! engine's state having changed.

use crate::types::{Coord, RoundOutcome, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A side placing its mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The cell that was marked.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, coord: Coord) -> Self {
        Self { side, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side.mark(), self.coord)
    }
}

/// A move that was applied, and the outcome right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move that was applied.
    pub applied: Move,
    /// Outcome after evaluating the board.
    pub outcome: RoundOutcome,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside 0-2.
    #[display("({row}, {col}) is off the board; use 0, 1, or 2")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already taken")]
    Occupied(#[error(not(source))] Coord),

    /// The round has already ended.
    #[display("Round is over ({_0}); start a new one first")]
    RoundOver(#[error(not(source))] RoundOutcome),
}

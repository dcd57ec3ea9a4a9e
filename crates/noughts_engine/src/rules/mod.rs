//! Round rules.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates state,
//! so the engine can evaluate as often as it likes.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{Board, RoundOutcome};
use tracing::instrument;

/// Evaluates the board.
///
/// All eight lines are checked; a completed line decides the round. With no
/// line, an empty cell means the round continues and a full board is a draw.
#[instrument(skip(board), ret, level = "trace")]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some(winner) = check_winner(board) {
        RoundOutcome::Won(winner)
    } else if is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}

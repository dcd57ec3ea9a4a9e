//! The round engine.
//!
//! One engine lives for a whole session. It holds the board, the outcome of
//! the current round, whose turn it is, and the running score. A console (or
//! any other front end) drives it; no rule logic lives outside this type.

use crate::action::{Move, MoveError, Placement};
use crate::rng::{RandomSource, SessionRng};
use crate::rules;
use crate::score::Scoreboard;
use crate::types::{Board, Cell, Coord, RoundOutcome, Side};
use tracing::{debug, info, instrument, warn};

/// Board, turn, outcome and scores for a session of rounds.
#[derive(Debug, Clone)]
pub struct RoundEngine<R = SessionRng> {
    board: Board,
    outcome: RoundOutcome,
    turn: Side,
    scores: Scoreboard,
    history: Vec<Move>,
    reported: bool,
    rng: R,
}

impl RoundEngine<SessionRng> {
    /// Creates an engine whose computer moves follow a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    /// Creates an engine with a fresh entropy-seeded generator.
    #[instrument]
    pub fn from_entropy() -> Self {
        let rng = SessionRng::from_entropy();
        info!(seed = rng.seed(), "Session RNG seeded");
        Self::new(rng)
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Creates an engine with an empty board, human to move, zero scores.
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            outcome: RoundOutcome::InProgress,
            turn: Side::Human,
            scores: Scoreboard::default(),
            history: Vec::new(),
            reported: false,
            rng,
        }
    }

    /// Starts a new round: clears the board, human moves first.
    ///
    /// Scores carry over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.outcome = RoundOutcome::InProgress;
        self.turn = Side::Human;
        self.reported = false;
        debug!(scores = %self.scores, "Round reset");
    }

    /// True iff `(row, col)` is on the board and empty.
    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.board.get_at(row, col) == Some(Cell::Empty)
    }

    /// Places the current side's mark at `(row, col)`.
    ///
    /// On success the outcome is re-evaluated and the turn passes to the
    /// other side unless the round just ended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the round is over, the coordinate is off
    /// the board, or the cell is taken. Nothing changes in that case.
    #[instrument(skip(self), fields(side = ?self.turn))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        if self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move attempted after round ended");
            return Err(MoveError::RoundOver(self.outcome));
        }

        let Some(coord) = Coord::new(row, col) else {
            debug!("Move rejected: off the board");
            return Err(MoveError::OutOfRange { row, col });
        };

        if !self.board.is_empty(coord) {
            debug!(%coord, "Move rejected: cell occupied");
            return Err(MoveError::Occupied(coord));
        }

        Ok(self.place(coord))
    }

    /// Evaluates the current board without touching it.
    pub fn evaluate(&self) -> RoundOutcome {
        rules::evaluate(&self.board)
    }

    /// Lets the computer mark a uniformly random empty cell.
    ///
    /// Does nothing and returns `None` unless the round is in progress and
    /// it is the computer's turn.
    #[instrument(skip(self))]
    pub fn automated_move(&mut self) -> Option<Placement> {
        if self.outcome.is_terminal() || self.turn != Side::Computer {
            debug!(outcome = ?self.outcome, turn = ?self.turn, "Automated move skipped");
            return None;
        }

        let open = self.board.empty_cells();
        if open.is_empty() {
            return None;
        }

        let choice = self.rng.pick(open.len());
        let coord = open[choice];
        debug!(%coord, options = open.len(), "Computer picked a cell");
        Some(self.place(coord))
    }

    /// Records the finished round in the score tally.
    ///
    /// Returns the outcome that was recorded. A round still in progress, or
    /// one that was already reported, is left alone and yields `None`.
    #[instrument(skip(self))]
    pub fn report_result(&mut self) -> Option<RoundOutcome> {
        if !self.outcome.is_terminal() {
            warn!("Result reported while round still in progress");
            return None;
        }
        if self.reported {
            debug!(outcome = ?self.outcome, "Round already reported");
            return None;
        }

        if let Some(winner) = self.outcome.winner() {
            self.scores.record_win(winner);
        }
        self.reported = true;
        info!(outcome = ?self.outcome, scores = %self.scores, "Round finished");
        Some(self.outcome)
    }

    /// Outcome of the current round.
    pub fn current_outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Side due to move next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Moves made this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The engine's random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn place(&mut self, coord: Coord) -> Placement {
        let applied = Move::new(self.turn, coord);
        self.board.set(coord, Cell::Marked(self.turn));
        self.history.push(applied);

        self.outcome = self.evaluate();
        if !self.outcome.is_terminal() {
            self.switch_turn();
        }

        debug!(%applied, outcome = ?self.outcome, "Mark placed");
        Placement {
            applied,
            outcome: self.outcome,
        }
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

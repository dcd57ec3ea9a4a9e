//! Noughts engine - rules for human-vs-computer tic-tac-toe.
//!
//! The engine is a plain synchronous state machine. A round goes from
//! in-progress to a win or a draw, and only [`RoundEngine::reset`] starts a
//! new one. Scores accumulate across rounds for as long as the engine lives.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{RoundEngine, RoundOutcome, Side};
//!
//! let mut engine = RoundEngine::seeded(7);
//! engine.reset();
//! engine.attempt_move(1, 1).expect("centre is free");
//! assert_eq!(engine.turn(), Side::Computer);
//!
//! let reply = engine.automated_move().expect("computer moves");
//! assert_ne!(reply.applied.coord.index(), 4);
//! assert_eq!(engine.current_outcome(), RoundOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod rng;
pub mod rules;
mod score;
mod types;

pub use action::{Move, MoveError, Placement};
pub use engine::RoundEngine;
pub use rng::{RandomSource, SessionRng};
pub use score::Scoreboard;
pub use types::{Board, Cell, Coord, RoundOutcome, Side};

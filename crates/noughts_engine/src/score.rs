//! Session score tally.

use crate::types::Side;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins per side across every round of a session.
///
/// Counts only ever go up; resetting a round leaves them alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by the human.
    human: u32,
    /// Rounds won by the computer.
    computer: u32,
}

impl Scoreboard {
    /// Wins recorded for one side.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    pub(crate) fn record_win(&mut self, side: Side) {
        let slot = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        *slot = slot.saturating_add(1);
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human Score: {} | Computer Score: {}",
            self.human, self.computer
        )
    }
}

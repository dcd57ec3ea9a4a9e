//! Console presentation loop.
//!
//! Reads human moves from a line-oriented input, lets the engine answer,
//! and prints the board and results. Input that does not parse is refused
//! here and the human is asked again without consulting the engine;
//! parsed moves go to the engine and a rejection is reported the same way.

use crate::input::{self, parse_move};
use crate::render::render_board;
use anyhow::Result;
use noughts_engine::{RandomSource, RoundEngine, RoundOutcome, Scoreboard, Side};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const MOVE_PROMPT: &str = "Enter row and col (0-2), or a label like B2: ";
const AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// Announcement printed when a round ends.
fn result_line(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Won(Side::Human) => "You win!",
        RoundOutcome::Won(Side::Computer) => "Computer wins!",
        RoundOutcome::Draw => "It's a tie!",
        RoundOutcome::InProgress => "Round still in progress.",
    }
}

/// How a round loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    InputClosed,
}

/// Line-oriented front end for a [`RoundEngine`].
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays rounds until the human declines, input ends, or `max_rounds`
    /// rounds have been played. Returns the final scores.
    ///
    /// # Errors
    ///
    /// Fails only when reading input or writing output fails.
    #[instrument(skip(self, engine))]
    pub fn run<S: RandomSource>(
        &mut self,
        engine: &mut RoundEngine<S>,
        max_rounds: Option<u32>,
    ) -> Result<Scoreboard> {
        let mut played = 0u32;

        loop {
            engine.reset();
            played += 1;
            info!(round = played, "Round started");

            if self.play_round(engine)? == RoundEnd::InputClosed {
                debug!("Input closed mid-round");
                break;
            }

            write!(self.output, "{}", render_board(engine.board()))?;
            if let Some(outcome) = engine.report_result() {
                writeln!(self.output, "{}", result_line(outcome))?;
            }
            writeln!(self.output, "{}", engine.scores())?;

            // A round cap replaces the play-again question.
            match max_rounds {
                Some(max) if played >= max => break,
                Some(_) => continue,
                None => {
                    if !self.prompt_play_again()? {
                        break;
                    }
                }
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        Ok(*engine.scores())
    }

    fn play_round<S: RandomSource>(&mut self, engine: &mut RoundEngine<S>) -> Result<RoundEnd> {
        while engine.current_outcome() == RoundOutcome::InProgress {
            write!(self.output, "{}", render_board(engine.board()))?;

            let Some(line) = self.prompt(MOVE_PROMPT)? else {
                return Ok(RoundEnd::InputClosed);
            };

            let (row, col) = match parse_move(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if let Err(e) = engine.attempt_move(row, col) {
                writeln!(self.output, "Invalid move. {e}")?;
                continue;
            }

            if let Some(reply) = engine.automated_move() {
                let coord = reply.applied.coord;
                writeln!(
                    self.output,
                    "Computer plays {} {} ({}).",
                    coord.row(),
                    coord.col(),
                    input::label(coord)
                )?;
            }
        }
        Ok(RoundEnd::Finished)
    }

    fn prompt_play_again(&mut self) -> Result<bool> {
        let answer = self.prompt(AGAIN_PROMPT)?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        ))
    }

    /// Prints a prompt and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_lines() {
        assert_eq!(result_line(RoundOutcome::Won(Side::Human)), "You win!");
        assert_eq!(result_line(RoundOutcome::Won(Side::Computer)), "Computer wins!");
        assert_eq!(result_line(RoundOutcome::Draw), "It's a tie!");
    }
}

//! Noughts - console tic-tac-toe against a random computer opponent.
//!
//! The rules live in [`noughts_engine`]; this crate is the thin shell
//! around them: command-line flags, session config, input parsing, board
//! rendering and the prompt/response loop.
//!
//! # Example
//!
//! Naming every cell once always finishes a round: each line either lands
//! or hits a cell that is already taken.
//!
//! ```
//! use noughts::Console;
//! use noughts_engine::RoundEngine;
//!
//! let mut engine = RoundEngine::seeded(1);
//! let input = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
//! let mut console = Console::new(input.as_bytes(), Vec::new());
//! let scores = console.run(&mut engine, Some(1))?;
//!
//! assert!(engine.current_outcome().is_terminal());
//! let expected = u32::from(engine.current_outcome().winner().is_some());
//! assert_eq!(scores.human() + scores.computer(), expected);
//! let output = String::from_utf8(console.into_output())?;
//! assert!(output.trim_end().ends_with("Thanks for playing!"));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod input;
mod render;

pub use cli::Cli;
pub use config::{ConfigError, SessionConfig};
pub use console::Console;
pub use input::{InputError, label, parse_move};
pub use render::render_board;

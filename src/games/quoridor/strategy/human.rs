//! Human player reading actions from a line-based input.

use super::{Strategy, StrategyError};
use crate::games::quoridor::action::{Action, ActionError};
use crate::games::quoridor::{Board, Player};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Prompts on `output` and parses one action per line from `input`.
///
/// Malformed lines are reported and re-read here; they never reach the
/// controller. End of input is an error.
pub struct HumanStrategy<I, O> {
    name: String,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> HumanStrategy<I, O> {
    /// Creates a human seat over the given streams.
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Releases the underlying streams.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I: BufRead, O: Write> Strategy for HumanStrategy<I, O> {
    #[instrument(skip(self, board), fields(seat = %self.name))]
    fn decide(&mut self, board: &Board, player: Player) -> Result<Action, StrategyError> {
        loop {
            write!(
                self.output,
                "Player {} (walls: {}) - enter MOVE <row> <col>, WALL <H|V> <row> <col> or PASS: ",
                player,
                board.remaining_walls(player)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StrategyError::new(format!(
                    "Input closed while waiting for player {}",
                    player
                )));
            }

            match line.parse::<Action>() {
                Ok(action) => {
                    debug!(%action, "Human entered action");
                    return Ok(action);
                }
                Err(err) => writeln!(self.output, "Invalid input: {}. Try again.", err)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn rejected(&mut self, action: Action, error: &ActionError) {
        if let Err(err) = writeln!(self.output, "Invalid move {}: {}. Try again.", action, error) {
            warn!(error = %err, "Failed to report rejected move");
        }
    }
}

//! Strategy trait and implementations.
//!
//! Every seat at the table, bot or human, is driven through [`Strategy`].

mod heuristic;
mod human;
mod random;

pub use heuristic::{HeuristicStrategy, WALL_SCAN_OFFSETS, blocking_wall};
pub use human::HumanStrategy;
pub use random::{RandomStrategy, candidate_actions};

use super::action::{Action, ActionError};
use super::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Decides what a player does with their turn.
pub trait Strategy {
    /// Chooses an action for `player` on the current board.
    ///
    /// Bots only propose legal actions; interactive strategies may not,
    /// in which case the controller calls [`Strategy::rejected`] and asks again.
    fn decide(&mut self, board: &Board, player: Player) -> Result<Action, StrategyError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;

    /// Called when the controller refuses an action this strategy chose.
    fn rejected(&mut self, _action: Action, _error: &ActionError) {}

    /// Returns true if a person answers for this seat.
    ///
    /// Interactive seats are re-prompted without an attempt limit.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Seat type selectable from config or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Moves typed on standard input.
    Human,
    /// Uniformly random legal actions.
    Easy,
    /// Shortest-path racing with opportunistic walls.
    Hard,
}

/// Strategy error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Strategy error: {} at {}:{}", message, file, line)]
pub struct StrategyError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StrategyError {
    /// Creates a new strategy error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StrategyError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(StrategyKind::from_str("hard"), Ok(StrategyKind::Hard));
        assert_eq!(StrategyKind::from_str("Easy"), Ok(StrategyKind::Easy));
        assert!(StrategyKind::from_str("expert").is_err());
        assert_eq!(StrategyKind::Human.to_string(), "human");
    }
}

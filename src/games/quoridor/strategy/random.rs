//! Uniformly random bot.

use super::{Strategy, StrategyError};
use crate::games::quoridor::action::Action;
use crate::games::quoridor::rules::{legal_moves, open_wall_slots};
use crate::games::quoridor::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Every legal action for `player`: moves first, then wall placements.
///
/// Walls are only offered while the player still has one in hand.
#[instrument(skip(board))]
pub fn candidate_actions(board: &Board, player: Player) -> Vec<Action> {
    let mut actions: Vec<Action> = legal_moves(board, player)
        .into_iter()
        .map(Action::Move)
        .collect();

    if board.remaining_walls(player) > 0 {
        actions.extend(
            open_wall_slots(board)
                .into_iter()
                .map(|(orientation, position)| Action::PlaceWall {
                    orientation,
                    position,
                }),
        );
    }
    actions
}

/// Picks uniformly among all legal moves and wall placements.
pub struct RandomStrategy<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a random bot drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    #[instrument(skip(self, board), fields(bot = %self.name))]
    fn decide(&mut self, board: &Board, player: Player) -> Result<Action, StrategyError> {
        let candidates = candidate_actions(board, player);
        let action = candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Pass);
        debug!(candidates = candidates.len(), %action, "Random bot chose action");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

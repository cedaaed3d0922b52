//! Wall budget invariant: every wall placed was paid for.

use super::super::{Action, TurnController};
use super::Invariant;

/// Invariant: for each seated player, walls in hand plus walls placed
/// equals walls held at the opening.
pub struct WallBudgetInvariant;

impl Invariant<TurnController> for WallBudgetInvariant {
    fn holds(game: &TurnController) -> bool {
        let board = game.board();
        board.players().all(|player| {
            let placed = game
                .history()
                .iter()
                .filter(|turn| {
                    turn.player == player && matches!(turn.action, Action::PlaceWall { .. })
                })
                .count();
            usize::from(board.remaining_walls(player)) + placed
                == usize::from(game.opening().remaining_walls(player))
        })
    }

    fn description() -> &'static str {
        "Walls in hand plus walls placed equals the starting supply"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quoridor::{Orientation, Player};

    #[test]
    fn test_spent_walls_hold() {
        let mut game = TurnController::new(2).unwrap();
        game.submit(Action::wall(Orientation::Vertical, 1, 1)).unwrap();
        game.submit(Action::wall(Orientation::Vertical, 2, 2)).unwrap();
        assert!(WallBudgetInvariant::holds(&game));
    }

    #[test]
    fn test_free_wall_violates() {
        let mut game = TurnController::new(2).unwrap();
        game.board.decrement_walls(Player::B);
        assert!(!WallBudgetInvariant::holds(&game));
    }
}

//! Single occupancy invariant: tokens and cells agree.

use super::super::{Player, Position, Square, TurnController};
use super::Invariant;

/// Invariant: every seated player's token sits on exactly the cell the
/// board records for it, and no other cell is occupied.
pub struct SingleOccupancyInvariant;

impl Invariant<TurnController> for SingleOccupancyInvariant {
    fn holds(game: &TurnController) -> bool {
        let board = game.board();

        for player in Player::ALL {
            match (board.is_seated(player), board.position_of(player)) {
                (true, Some(pos)) if board.square(pos) == Some(Square::Occupied(player)) => {}
                (false, None) => {}
                _ => return false,
            }
        }

        let occupied = (0..board.rows())
            .flat_map(|row| (0..board.cols()).map(move |col| Position::new(row, col)))
            .filter(|&pos| matches!(board.square(pos), Some(Square::Occupied(_))))
            .count();
        occupied == board.player_count()
    }

    fn description() -> &'static str {
        "Each token occupies exactly one cell and each occupied cell holds its token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quoridor::Action;

    #[test]
    fn test_new_match_holds() {
        for count in 2..=4 {
            let game = TurnController::new(count).unwrap();
            assert!(SingleOccupancyInvariant::holds(&game));
        }
    }

    #[test]
    fn test_moves_hold() {
        let mut game = TurnController::new(2).unwrap();
        game.submit(Action::step(7, 4)).unwrap();
        game.submit(Action::step(1, 4)).unwrap();
        game.submit(Action::step(7, 3)).unwrap();
        assert!(SingleOccupancyInvariant::holds(&game));
    }
}

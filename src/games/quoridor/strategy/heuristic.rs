//! Shortest-path bot that walls in opponents who are ahead.

use super::{Strategy, StrategyError};
use crate::games::quoridor::action::Action;
use crate::games::quoridor::rules::path::SEARCH_ORDER;
use crate::games::quoridor::rules::{
    can_move_to, can_place_wall, next_step_toward_goal, shortest_distance,
};
use crate::games::quoridor::{Board, Orientation, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Slots tried around the opponent's cell, in order.
pub const WALL_SCAN_OFFSETS: [(isize, isize); 9] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// First open wall slot next to `target`, horizontal slots before vertical.
///
/// Only slots with `row < rows - 1` and `col < cols - 1` are considered,
/// whatever the orientation.
#[instrument(skip(board))]
pub fn blocking_wall(board: &Board, target: Position) -> Option<Action> {
    for orientation in Orientation::iter() {
        for (d_row, d_col) in WALL_SCAN_OFFSETS {
            let Some(slot) = target.offset(d_row, d_col) else {
                continue;
            };
            if slot.row + 1 < board.rows()
                && slot.col + 1 < board.cols()
                && can_place_wall(board, orientation, slot)
            {
                return Some(Action::PlaceWall {
                    orientation,
                    position: slot,
                });
            }
        }
    }
    None
}

/// Legal steps for `player` in path search order: down, up, right, left.
fn fallback_moves(board: &Board, player: Player) -> Vec<Position> {
    let Some(from) = board.position_of(player) else {
        return Vec::new();
    };
    SEARCH_ORDER
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| can_move_to(board, player, target))
        .collect()
}

/// Races along the shortest path, spending walls on the next opponent
/// whenever that opponent is at least as close to winning.
///
/// The policy is a fixed priority list, evaluated top to bottom:
/// 1. wall next to the opponent, if walls remain and the opponent is not behind;
/// 2. next step on the shortest path;
/// 3. any legal move, chosen at random;
/// 4. wall next to the opponent, if walls remain;
/// 5. pass.
pub struct HeuristicStrategy<R> {
    name: String,
    rng: R,
}

impl<R: Rng> HeuristicStrategy<R> {
    /// Creates a heuristic bot; `rng` is only used for the random fallback move.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Strategy for HeuristicStrategy<R> {
    #[instrument(skip(self, board), fields(bot = %self.name))]
    fn decide(&mut self, board: &Board, player: Player) -> Result<Action, StrategyError> {
        let Some(own_pos) = board.position_of(player) else {
            return Ok(Action::Pass);
        };
        let Some((opponent, opponent_pos)) = board
            .next_player(player)
            .and_then(|opponent| board.position_of(opponent).map(|pos| (opponent, pos)))
        else {
            return Ok(Action::Pass);
        };

        let own_distance = shortest_distance(board, player, own_pos);
        let opponent_distance = shortest_distance(board, opponent, opponent_pos);
        let has_walls = board.remaining_walls(player) > 0;
        debug!(
            %own_distance,
            opponent = %opponent,
            %opponent_distance,
            has_walls,
            "Evaluating race"
        );

        if has_walls
            && opponent_distance <= own_distance
            && let Some(wall) = blocking_wall(board, opponent_pos)
        {
            debug!(%wall, "Blocking opponent");
            return Ok(wall);
        }

        if let Some(step) = next_step_toward_goal(board, player, own_pos) {
            return Ok(Action::Move(step));
        }

        if let Some(&target) = fallback_moves(board, player).choose(&mut self.rng) {
            debug!(%target, "No path to goal, moving at random");
            return Ok(Action::Move(target));
        }

        if has_walls && let Some(wall) = blocking_wall(board, opponent_pos) {
            return Ok(wall);
        }

        debug!("Nothing to do, passing");
        Ok(Action::Pass)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quoridor::STARTING_WALLS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bot() -> HeuristicStrategy<ChaCha8Rng> {
        HeuristicStrategy::new("hard", ChaCha8Rng::seed_from_u64(11))
    }

    #[test]
    fn test_blocking_wall_prefers_own_cell_horizontal() {
        let board = Board::new(2).unwrap();
        assert_eq!(
            blocking_wall(&board, Position::new(0, 4)),
            Some(Action::wall(Orientation::Horizontal, 0, 4))
        );
    }

    #[test]
    fn test_blocking_wall_skips_taken_and_edge_slots() {
        let mut board = Board::new(2).unwrap();
        // Opponent in the bottom-right corner: only offsets pointing up-left fit.
        board
            .apply_wall(Orientation::Horizontal, Position::new(7, 7), Player::A)
            .unwrap();
        assert_eq!(
            blocking_wall(&board, Position::new(8, 8)),
            Some(Action::wall(Orientation::Vertical, 7, 7))
        );
    }

    #[test]
    fn test_moves_when_ahead() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(Player::B, Position::new(0, 3)).unwrap();
        board.apply_move(Player::A, Position::new(7, 4)).unwrap();
        // A needs 7, B needs 8: A is ahead, so it walks.
        assert_eq!(
            bot().decide(&board, Player::A).unwrap(),
            Action::step(6, 4)
        );
    }

    #[test]
    fn test_random_move_when_enclosed() {
        let mut board = Board::new(2).unwrap();
        for col in 3..=5 {
            board
                .apply_wall(Orientation::Horizontal, Position::new(7, col), Player::B)
                .unwrap();
        }
        board
            .apply_wall(Orientation::Vertical, Position::new(8, 2), Player::B)
            .unwrap();
        board
            .apply_wall(Orientation::Vertical, Position::new(8, 5), Player::B)
            .unwrap();
        for _ in 0..STARTING_WALLS {
            board.decrement_walls(Player::A);
        }

        let action = bot().decide(&board, Player::A).unwrap();
        assert!(
            action == Action::step(8, 3) || action == Action::step(8, 5),
            "unexpected {action}"
        );
    }

    #[test]
    fn test_fallback_moves_follow_search_order() {
        let board = Board::new(3).unwrap();
        // C at (4, 0): down, up, right; left is off the grid.
        assert_eq!(
            fallback_moves(&board, Player::C),
            vec![Position::new(5, 0), Position::new(3, 0), Position::new(4, 1)]
        );
    }

    #[test]
    fn test_walls_opponent_when_stuck_on_goal_line() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(Player::A, Position::new(8, 3)).unwrap();
        for row in (0..=7).rev() {
            board.apply_move(Player::A, Position::new(row, 3)).unwrap();
        }
        for row in 1..=2 {
            board.apply_move(Player::B, Position::new(row, 4)).unwrap();
        }
        for (orientation, col) in [
            (Orientation::Vertical, 2),
            (Orientation::Vertical, 3),
            (Orientation::Horizontal, 3),
        ] {
            board
                .apply_wall(orientation, Position::new(0, col), Player::B)
                .unwrap();
        }

        // A needs 0 steps and cannot move; B needs 6, so only the late wall fires.
        assert_eq!(board.remaining_walls(Player::A), STARTING_WALLS);
        assert_eq!(
            bot().decide(&board, Player::A).unwrap(),
            Action::wall(Orientation::Horizontal, 2, 4)
        );
    }

    #[test]
    fn test_passes_when_boxed_in_without_walls() {
        let mut board = Board::new(2).unwrap();
        board
            .apply_wall(Orientation::Horizontal, Position::new(7, 4), Player::B)
            .unwrap();
        board
            .apply_wall(Orientation::Vertical, Position::new(8, 3), Player::B)
            .unwrap();
        board
            .apply_wall(Orientation::Vertical, Position::new(8, 4), Player::B)
            .unwrap();
        for _ in 0..STARTING_WALLS {
            board.decrement_walls(Player::A);
        }
        assert_eq!(bot().decide(&board, Player::A).unwrap(), Action::Pass);
    }
}

//! Goal lines and win detection.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The row or column a player must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalLine {
    /// Any cell in this row.
    Row(usize),
    /// Any cell in this column.
    Column(usize),
}

impl GoalLine {
    /// Returns true if the position lies on the line.
    pub fn contains(self, pos: Position) -> bool {
        match self {
            GoalLine::Row(row) => pos.row == row,
            GoalLine::Column(col) => pos.col == col,
        }
    }
}

/// Goal line for a player on a `rows x cols` grid.
///
/// Each player races to the edge opposite their starting edge.
pub fn goal_line(player: Player, rows: usize, cols: usize) -> GoalLine {
    match player {
        Player::A => GoalLine::Row(0),
        Player::B => GoalLine::Row(rows - 1),
        Player::C => GoalLine::Column(cols - 1),
        Player::D => GoalLine::Column(0),
    }
}

/// Returns true if `pos` satisfies `player`'s goal on this board.
pub fn is_goal(board: &Board, player: Player, pos: Position) -> bool {
    goal_line(player, board.rows(), board.cols()).contains(pos)
}

/// Returns true if a seated player stands on their goal line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    board
        .position_of(player)
        .is_some_and(|pos| is_goal(board, player, pos))
}

/// First seated player, in join order, standing on their goal line.
pub fn winner(board: &Board) -> Option<Player> {
    board.players().find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_at_start() {
        for count in 2..=4 {
            let board = Board::new(count).unwrap();
            assert_eq!(winner(&board), None);
        }
    }

    #[test]
    fn test_goal_lines_on_standard_board() {
        assert_eq!(goal_line(Player::A, 9, 9), GoalLine::Row(0));
        assert_eq!(goal_line(Player::B, 9, 9), GoalLine::Row(8));
        assert_eq!(goal_line(Player::C, 9, 9), GoalLine::Column(8));
        assert_eq!(goal_line(Player::D, 9, 9), GoalLine::Column(0));
    }

    #[test]
    fn test_winner_on_small_board() {
        // 2x2: A starts at (1, 1), B holds (0, 1).
        let mut board = Board::with_dimensions(2, 2, 2).unwrap();
        assert_eq!(board.position_of(Player::B), Some(Position::new(0, 1)));
        board.apply_move(Player::A, Position::new(1, 0)).unwrap();
        board.apply_move(Player::A, Position::new(0, 0)).unwrap();
        assert_eq!(winner(&board), Some(Player::A));
    }
}

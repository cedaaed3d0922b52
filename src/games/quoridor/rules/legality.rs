//! Step and wall legality.

use super::super::action::ActionError;
use super::super::{Board, Orientation, Player, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Candidate step offsets in the order bots enumerate them: up, down, left, right.
pub const STEP_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns true if a token may step from `from` to `to`.
///
/// Only in-bounds, single orthogonal steps qualify, and no wall may sit
/// between the two cells. Occupancy is not considered here.
pub fn can_step(board: &Board, from: Position, to: Position) -> bool {
    if !board.in_bounds(from) || !board.in_bounds(to) || from.manhattan(to) != 1 {
        return false;
    }

    // The wall slot between two adjacent cells is addressed by the
    // upper (horizontal wall) or left (vertical wall) cell of the pair.
    let (orientation, slot) = if from.row == to.row {
        (Orientation::Vertical, Position::new(from.row, from.col.min(to.col)))
    } else {
        (Orientation::Horizontal, Position::new(from.row.min(to.row), from.col))
    };
    board.wall_at(orientation, slot).is_none()
}

/// Returns true if `player` may move onto `target` this turn.
pub fn can_move_to(board: &Board, player: Player, target: Position) -> bool {
    match board.position_of(player) {
        Some(from) => board.is_free(target) && can_step(board, from, target),
        None => false,
    }
}

/// Returns true if the slot exists and is empty.
///
/// Placing a wall here may still cut a player off from their goal.
pub fn can_place_wall(board: &Board, orientation: Orientation, pos: Position) -> bool {
    board.wall_in_range(orientation, pos) && board.wall_at(orientation, pos).is_none()
}

/// Explains why `player` may not move onto `target`.
///
/// Returns the player's current cell when the move is legal.
pub fn validate_move(
    board: &Board,
    player: Player,
    target: Position,
) -> Result<Position, ActionError> {
    let from = board
        .position_of(player)
        .ok_or(ActionError::NotSeated(player))?;

    if !board.in_bounds(target) {
        return Err(ActionError::OutOfBounds(target));
    }
    if !board.is_free(target) {
        return Err(ActionError::Occupied(target));
    }
    if from.manhattan(target) != 1 {
        return Err(ActionError::NotAdjacent { from, to: target });
    }
    if !can_step(board, from, target) {
        return Err(ActionError::Blocked { from, to: target });
    }
    Ok(from)
}

/// Explains why a wall may not go into the slot.
pub fn validate_wall(
    board: &Board,
    orientation: Orientation,
    pos: Position,
) -> Result<(), ActionError> {
    if !board.wall_in_range(orientation, pos) {
        return Err(ActionError::WallOutOfRange {
            orientation,
            position: pos,
        });
    }
    if board.wall_at(orientation, pos).is_some() {
        return Err(ActionError::WallTaken {
            orientation,
            position: pos,
        });
    }
    Ok(())
}

/// Every cell `player` may step onto, in [`STEP_OFFSETS`] order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    let Some(from) = board.position_of(player) else {
        return Vec::new();
    };
    STEP_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| can_move_to(board, player, target))
        .collect()
}

/// Every empty wall slot, row-major, horizontal before vertical within a cell.
#[instrument(skip(board))]
pub fn open_wall_slots(board: &Board) -> Vec<(Orientation, Position)> {
    let mut slots = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Position::new(row, col);
            for orientation in Orientation::iter() {
                if can_place_wall(board, orientation, pos) {
                    slots.push((orientation, pos));
                }
            }
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_and_long_steps_rejected() {
        let board = Board::new(2).unwrap();
        let center = Position::new(4, 4);
        assert!(!can_step(&board, center, Position::new(5, 5)));
        assert!(!can_step(&board, center, Position::new(4, 6)));
        assert!(!can_step(&board, center, center));
    }

    #[test]
    fn test_vertical_wall_blocks_both_directions() {
        let mut board = Board::new(2).unwrap();
        board
            .apply_wall(Orientation::Vertical, Position::new(3, 3), Player::A)
            .unwrap();
        assert!(!can_step(&board, Position::new(3, 3), Position::new(3, 4)));
        assert!(!can_step(&board, Position::new(3, 4), Position::new(3, 3)));
        assert!(can_step(&board, Position::new(3, 3), Position::new(4, 3)));
        assert!(can_step(&board, Position::new(2, 4), Position::new(3, 4)));
    }

    #[test]
    fn test_horizontal_wall_blocks_both_directions() {
        let mut board = Board::new(2).unwrap();
        board
            .apply_wall(Orientation::Horizontal, Position::new(3, 3), Player::A)
            .unwrap();
        assert!(!can_step(&board, Position::new(3, 3), Position::new(4, 3)));
        assert!(!can_step(&board, Position::new(4, 3), Position::new(3, 3)));
        assert!(can_step(&board, Position::new(3, 3), Position::new(3, 4)));
    }

    #[test]
    fn test_can_move_to_requires_free_cell() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(Player::B, Position::new(1, 4)).unwrap();
        board.apply_move(Player::B, Position::new(2, 4)).unwrap();
        board.apply_move(Player::A, Position::new(7, 4)).unwrap();
        // Walk A up to meet B.
        for row in (3..7).rev() {
            board.apply_move(Player::A, Position::new(row, 4)).unwrap();
        }
        assert!(!can_move_to(&board, Player::A, Position::new(2, 4)));
        assert!(can_move_to(&board, Player::A, Position::new(3, 3)));
    }

    #[test]
    fn test_validate_move_reasons() {
        let board = Board::new(2).unwrap();
        assert_eq!(
            validate_move(&board, Player::A, Position::new(7, 4)),
            Ok(Position::new(8, 4))
        );
        assert_eq!(
            validate_move(&board, Player::C, Position::new(4, 1)),
            Err(ActionError::NotSeated(Player::C))
        );
        assert_eq!(
            validate_move(&board, Player::B, Position::new(0, 9)),
            Err(ActionError::OutOfBounds(Position::new(0, 9)))
        );
        assert_eq!(
            validate_move(&board, Player::B, Position::new(8, 4)),
            Err(ActionError::Occupied(Position::new(8, 4)))
        );
    }

    #[test]
    fn test_validate_wall_reasons() {
        let mut board = Board::new(2).unwrap();
        board
            .apply_wall(Orientation::Vertical, Position::new(2, 2), Player::A)
            .unwrap();
        assert!(matches!(
            validate_wall(&board, Orientation::Vertical, Position::new(2, 2)),
            Err(ActionError::WallTaken { .. })
        ));
        assert!(matches!(
            validate_wall(&board, Orientation::Vertical, Position::new(2, 8)),
            Err(ActionError::WallOutOfRange { .. })
        ));
        assert!(validate_wall(&board, Orientation::Horizontal, Position::new(2, 8)).is_ok());
    }

    #[test]
    fn test_open_wall_slots_on_empty_board() {
        let board = Board::new(2).unwrap();
        // 8x9 horizontal plus 9x8 vertical.
        assert_eq!(open_wall_slots(&board).len(), 144);
        assert_eq!(
            open_wall_slots(&board)[0],
            (Orientation::Horizontal, Position::new(0, 0))
        );
    }

    #[test]
    fn test_legal_moves_order() {
        let board = Board::new(4).unwrap();
        // C at (4, 0): up, down, right.
        assert_eq!(
            legal_moves(&board, Player::C),
            vec![Position::new(3, 0), Position::new(5, 0), Position::new(4, 1)]
        );
    }
}

//! Monotonic walls invariant: walls are only ever added.

use super::super::{Action, Orientation, Position, TurnController};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: the wall lattices equal the opening lattices plus the walls
/// in the action history, each placed into a slot that was empty.
pub struct MonotonicWallsInvariant;

impl Invariant<TurnController> for MonotonicWallsInvariant {
    fn holds(game: &TurnController) -> bool {
        let mut reconstructed = game.opening().clone();

        for turn in game.history() {
            if let Action::PlaceWall {
                orientation,
                position,
            } = turn.action
                && reconstructed
                    .apply_wall(orientation, position, turn.player)
                    .is_err()
            {
                return false;
            }
        }

        let board = game.board();
        (0..board.rows()).all(|row| {
            (0..board.cols()).all(|col| {
                let pos = Position::new(row, col);
                Orientation::iter().all(|orientation| {
                    reconstructed.wall_at(orientation, pos) == board.wall_at(orientation, pos)
                })
            })
        })
    }

    fn description() -> &'static str {
        "Wall slots are monotonic (never cleared or overwritten)"
    }
}

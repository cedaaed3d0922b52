//! First-class action types for Quoridor.
//!
//! Actions are domain events produced by strategies (or parsed from
//! player input) and consumed by the board's mutator. The textual
//! encoding is `MOVE <row> <col>`, `WALL <H|V> <row> <col>` or `PASS`.

use super::{Orientation, Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One turn's worth of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step the acting player's token onto an adjacent cell.
    Move(Position),
    /// Place a wall segment in a lattice slot.
    PlaceWall {
        /// Which lattice the slot belongs to.
        orientation: Orientation,
        /// Slot coordinate within that lattice.
        position: Position,
    },
    /// Do nothing this turn.
    Pass,
}

impl Action {
    /// Convenience constructor for a move.
    pub fn step(row: usize, col: usize) -> Self {
        Action::Move(Position::new(row, col))
    }

    /// Convenience constructor for a wall placement.
    pub fn wall(orientation: Orientation, row: usize, col: usize) -> Self {
        Action::PlaceWall {
            orientation,
            position: Position::new(row, col),
        }
    }

    /// Returns true for wall placements.
    pub fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "MOVE {} {}", pos.row, pos.col),
            Action::PlaceWall {
                orientation,
                position,
            } => write!(f, "WALL {} {} {}", orientation, position.row, position.col),
            Action::Pass => write!(f, "PASS"),
        }
    }
}

/// Error produced when player input is not a well-formed action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseActionError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,

    /// First word is not MOVE, WALL or PASS.
    #[display("Unknown command {:?}", _0)]
    UnknownVerb(String),

    /// Wrong number of arguments for the verb.
    #[display("{} expects {} argument(s), got {}", verb, expected, got)]
    Arity {
        /// The verb that was given.
        verb: &'static str,
        /// Arguments the verb takes.
        expected: usize,
        /// Arguments supplied.
        got: usize,
    },

    /// A coordinate is not a non-negative integer.
    #[display("Invalid coordinate {:?}", _0)]
    BadCoordinate(String),

    /// Wall orientation is not H or V.
    #[display("Invalid wall orientation {:?} (expected H or V)", _0)]
    BadOrientation(String),
}

impl std::error::Error for ParseActionError {}

fn parse_coordinate(word: &str) -> Result<usize, ParseActionError> {
    word.parse::<usize>()
        .map_err(|_| ParseActionError::BadCoordinate(word.to_string()))
}

impl FromStr for Action {
    type Err = ParseActionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((verb, args)) = words.split_first() else {
            return Err(ParseActionError::Empty);
        };

        match verb.to_ascii_uppercase().as_str() {
            "MOVE" => {
                let [row, col] = args else {
                    return Err(ParseActionError::Arity {
                        verb: "MOVE",
                        expected: 2,
                        got: args.len(),
                    });
                };
                Ok(Action::step(parse_coordinate(row)?, parse_coordinate(col)?))
            }
            "WALL" => {
                let [orientation, row, col] = args else {
                    return Err(ParseActionError::Arity {
                        verb: "WALL",
                        expected: 3,
                        got: args.len(),
                    });
                };
                let mut letters = orientation.chars();
                let orientation = match (letters.next(), letters.next()) {
                    (Some(letter), None) => Orientation::from_letter(letter),
                    _ => None,
                }
                .ok_or_else(|| ParseActionError::BadOrientation(orientation.to_string()))?;
                Ok(Action::wall(
                    orientation,
                    parse_coordinate(row)?,
                    parse_coordinate(col)?,
                ))
            }
            "PASS" if args.is_empty() => Ok(Action::Pass),
            "PASS" => Err(ParseActionError::Arity {
                verb: "PASS",
                expected: 0,
                got: args.len(),
            }),
            _ => Err(ParseActionError::UnknownVerb(verb.to_string())),
        }
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// Target cell lies outside the grid.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Position),

    /// Target cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// Target is not exactly one orthogonal step away.
    #[display("Cell {} is not adjacent to {}", to, from)]
    NotAdjacent {
        /// Where the token stands.
        from: Position,
        /// Where it was asked to go.
        to: Position,
    },

    /// A wall separates the two cells.
    #[display("A wall blocks the step from {} to {}", from, to)]
    Blocked {
        /// Where the token stands.
        from: Position,
        /// Where it was asked to go.
        to: Position,
    },

    /// Wall slot lies outside its lattice.
    #[display("No {:?} wall slot at {}", orientation, position)]
    WallOutOfRange {
        /// Requested lattice.
        orientation: Orientation,
        /// Requested slot.
        position: Position,
    },

    /// Wall slot is already taken.
    #[display("{:?} wall slot {} is already taken", orientation, position)]
    WallTaken {
        /// Requested lattice.
        orientation: Orientation,
        /// Requested slot.
        position: Position,
    },

    /// Player has no walls left to place.
    #[display("Player {} has no walls left", _0)]
    NoWallsLeft(Player),

    /// Player is not seated on this board.
    #[display("Player {} is not in this game", _0)]
    NotSeated(Player),

    /// The match is already decided.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_forms() {
        assert_eq!("MOVE 7 4".parse::<Action>(), Ok(Action::step(7, 4)));
        assert_eq!(
            "WALL H 3 4".parse::<Action>(),
            Ok(Action::wall(Orientation::Horizontal, 3, 4))
        );
        assert_eq!("PASS".parse::<Action>(), Ok(Action::Pass));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("  move 1   2 ".parse::<Action>(), Ok(Action::step(1, 2)));
        assert_eq!(
            "wall v 0 7".parse::<Action>(),
            Ok(Action::wall(Orientation::Vertical, 0, 7))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
        assert!(matches!(
            "JUMP 1 2".parse::<Action>(),
            Err(ParseActionError::UnknownVerb(_))
        ));
        assert!(matches!(
            "MOVE 1".parse::<Action>(),
            Err(ParseActionError::Arity { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            "MOVE -1 4".parse::<Action>(),
            Err(ParseActionError::BadCoordinate(_))
        ));
        assert!(matches!(
            "WALL X 1 1".parse::<Action>(),
            Err(ParseActionError::BadOrientation(_))
        ));
        assert!(matches!(
            "PASS now".parse::<Action>(),
            Err(ParseActionError::Arity { .. })
        ));
    }

    #[test]
    fn test_display_matches_encoding() {
        assert_eq!(Action::step(3, 5).to_string(), "MOVE 3 5");
        assert_eq!(
            Action::wall(Orientation::Vertical, 2, 6).to_string(),
            "WALL V 2 6"
        );
        assert_eq!(Action::Pass.to_string(), "PASS");
    }
}

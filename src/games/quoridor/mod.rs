//! Quoridor: race a token to the far edge while walling in opponents.
//!
//! The board seats 2 to 4 players on a 9x9 grid. Each turn a player steps
//! one cell orthogonally, places a wall segment between two cells, or
//! passes. The first player to reach the edge opposite their start wins.

mod action;
mod board;
pub mod contracts;
mod controller;
pub mod invariants;
pub mod rules;
pub mod strategy;
mod types;

pub use action::{Action, ActionError, ParseActionError};
pub use board::{Board, BoardSnapshot, PlayerSnapshot, STANDARD_SIZE, SetupError, start_position};
pub use controller::{DEFAULT_MAX_ATTEMPTS, MatchError, Phase, Turn, TurnController};
pub use rules::{Distance, GoalLine};
pub use strategy::{
    HeuristicStrategy, HumanStrategy, RandomStrategy, Strategy, StrategyError, StrategyKind,
};
pub use types::{MAX_PLAYERS, Orientation, Player, Position, STARTING_WALLS, Square};

//! Strictly Quoridor library - rule-checked Quoridor engine
//!
//! This library provides a Quoridor board with wall lattices, legality
//! checks, breadth-first shortest paths and pluggable player strategies.
//!
//! # Architecture
//!
//! - **Board**: grid occupancy, wall slots and per-player wall budgets
//! - **Rules**: step/wall legality, goal lines, shortest paths
//! - **Strategies**: random and shortest-path bots, line-based human input
//! - **Controller**: turn sequencing with contract-checked actions
//!
//! # Example
//!
//! ```
//! use strictly_quoridor::{Action, Phase, Player, TurnController};
//!
//! let mut game = TurnController::new(2)?;
//! let phase = game.submit("MOVE 7 4".parse::<Action>()?)?;
//! assert_eq!(phase, Phase::AwaitingAction(Player::B));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Match configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Game types (Quoridor)
pub use games::quoridor::{
    Action, ActionError, Board, BoardSnapshot, DEFAULT_MAX_ATTEMPTS, Distance, GoalLine,
    HeuristicStrategy, HumanStrategy, MAX_PLAYERS, MatchError, Orientation, ParseActionError,
    Phase, Player, PlayerSnapshot, Position, RandomStrategy, STANDARD_SIZE, STARTING_WALLS,
    SetupError, Square, Strategy, StrategyError, StrategyKind, Turn, TurnController,
    start_position,
};

// Crate-level exports - Rules, contracts and invariants
pub use games::quoridor::{contracts, invariants, rules};

// Crate-level exports - Strategy helpers
pub use games::quoridor::strategy::{WALL_SCAN_OFFSETS, blocking_wall, candidate_actions};

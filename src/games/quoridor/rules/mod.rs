//! Game rules for Quoridor.
//!
//! Pure functions over [`Board`](super::Board): step and wall legality,
//! goal lines and win detection, and breadth-first path search. Rules are
//! kept apart from board storage so strategies and contracts can share them.

pub mod legality;
pub mod path;
pub mod win;

pub use legality::{
    can_move_to, can_place_wall, can_step, legal_moves, open_wall_slots, validate_move,
    validate_wall,
};
pub use path::{Distance, next_step_toward_goal, shortest_distance};
pub use win::{GoalLine, goal_line, has_won, winner};

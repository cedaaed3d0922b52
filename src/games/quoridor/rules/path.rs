//! Breadth-first path search toward a player's goal line.
//!
//! The search graph is the grid with an edge between two orthogonal
//! neighbours whenever no wall separates them; cells holding any token
//! are not entered. Neighbours are expanded in [`SEARCH_ORDER`], so the
//! result is fully determined by the board.

use super::super::{Board, Player, Position};
use super::legality::can_step;
use super::win::is_goal;
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// Neighbour expansion order: down, up, right, left.
pub const SEARCH_ORDER: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Length of a shortest path, or the lack of one.
///
/// Orders every reachable distance before `Unreachable`, so comparisons
/// treat a cut-off player as infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Number of steps to the nearest goal cell.
    Steps(usize),
    /// Walls and tokens leave no route to the goal.
    Unreachable,
}

impl Distance {
    /// Step count if the goal is reachable.
    pub fn steps(self) -> Option<usize> {
        match self {
            Distance::Steps(steps) => Some(steps),
            Distance::Unreachable => None,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Steps(steps) => write!(f, "{}", steps),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Goal cell found by a search, plus the predecessor of every visited cell.
struct SearchTree {
    goal: Position,
    depth: usize,
    parents: Vec<Option<Position>>,
    cols: usize,
}

impl SearchTree {
    fn parent(&self, pos: Position) -> Option<Position> {
        self.parents[pos.row * self.cols + pos.col]
    }
}

fn breadth_first(board: &Board, player: Player, from: Position) -> Option<SearchTree> {
    if !board.in_bounds(from) {
        return None;
    }

    let cols = board.cols();
    let index = |pos: Position| pos.row * cols + pos.col;
    let mut visited = vec![false; board.rows() * cols];
    let mut parents = vec![None; board.rows() * cols];
    let mut frontier = VecDeque::from([(from, 0)]);
    visited[index(from)] = true;

    while let Some((current, depth)) = frontier.pop_front() {
        if is_goal(board, player, current) {
            return Some(SearchTree {
                goal: current,
                depth,
                parents,
                cols,
            });
        }

        for (d_row, d_col) in SEARCH_ORDER {
            let Some(next) = current.offset(d_row, d_col) else {
                continue;
            };
            if !board.is_free(next) || !can_step(board, current, next) {
                continue;
            }
            let idx = index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            parents[idx] = Some(current);
            frontier.push_back((next, depth + 1));
        }
    }

    None
}

/// Number of steps from `from` to the nearest cell on `player`'s goal line.
#[instrument(skip(board))]
pub fn shortest_distance(board: &Board, player: Player, from: Position) -> Distance {
    let distance = breadth_first(board, player, from)
        .map_or(Distance::Unreachable, |tree| Distance::Steps(tree.depth));
    trace!(%distance, "Shortest distance computed");
    distance
}

/// First cell along a shortest path from `from` to `player`'s goal line.
///
/// `None` when the goal is unreachable or `from` already lies on it.
#[instrument(skip(board))]
pub fn next_step_toward_goal(board: &Board, player: Player, from: Position) -> Option<Position> {
    let tree = breadth_first(board, player, from)?;

    let mut step = tree.goal;
    loop {
        let parent = tree.parent(step)?;
        if parent == from {
            return Some(step);
        }
        step = parent;
    }
}

//! Board state: grid occupancy, wall lattices and per-player bookkeeping.

use super::action::{Action, ActionError};
use super::rules::{legality, win};
use super::{MAX_PLAYERS, Orientation, Player, Position, STARTING_WALLS, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 9;

/// Error raised when a board cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Player count outside 2..=4.
    #[display("Quoridor needs 2 to 4 players, got {}", _0)]
    PlayerCount(usize),

    /// Grid too small to play on.
    #[display("Board must be at least 2x2, got {}x{}", rows, cols)]
    GridTooSmall {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Two players would start on the same cell.
    #[display("Players {} and {} would both start at {}", first, second, position)]
    OverlappingStart {
        /// Earlier player in join order.
        first: Player,
        /// Later player in join order.
        second: Player,
        /// The contested cell.
        position: Position,
    },
}

impl std::error::Error for SetupError {}

/// Quoridor board.
///
/// Cells and wall slots are stored row-major. Per-player state lives in
/// fixed arrays indexed by [`Player::index`]; players beyond the seated
/// count have no position and no walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Square>,
    /// `rows x (cols - 1)` slots.
    vertical_walls: Vec<Option<Player>>,
    /// `(rows - 1) x cols` slots.
    horizontal_walls: Vec<Option<Player>>,
    positions: [Option<Position>; MAX_PLAYERS],
    walls_left: [u8; MAX_PLAYERS],
    player_count: usize,
}

impl Board {
    /// Creates a standard 9x9 board seating `player_count` players.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        Self::with_dimensions(STANDARD_SIZE, STANDARD_SIZE, player_count)
    }

    /// Creates a board of arbitrary size.
    ///
    /// Players start at the middle of their home edge: A on the last row,
    /// B on the first row, C on the first column, D on the last column.
    #[instrument]
    pub fn with_dimensions(
        rows: usize,
        cols: usize,
        player_count: usize,
    ) -> Result<Self, SetupError> {
        if !(2..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::PlayerCount(player_count));
        }
        if rows < 2 || cols < 2 {
            return Err(SetupError::GridTooSmall { rows, cols });
        }

        let mut board = Self {
            rows,
            cols,
            cells: vec![Square::Empty; rows * cols],
            vertical_walls: vec![None; rows * (cols - 1)],
            horizontal_walls: vec![None; (rows - 1) * cols],
            positions: [None; MAX_PLAYERS],
            walls_left: [0; MAX_PLAYERS],
            player_count,
        };

        for player in Player::ALL.into_iter().take(player_count) {
            let start = start_position(player, rows, cols);
            if let Square::Occupied(first) = board.cells[board.cell_index(start)] {
                return Err(SetupError::OverlappingStart {
                    first,
                    second: player,
                    position: start,
                });
            }
            let idx = board.cell_index(start);
            board.cells[idx] = Square::Occupied(player);
            board.positions[player.index()] = Some(start);
            board.walls_left[player.index()] = STARTING_WALLS;
        }

        debug!(rows, cols, player_count, "Board created");
        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Seated players in join order.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        Player::ALL.into_iter().take(self.player_count)
    }

    /// Returns true if the player has a seat on this board.
    pub fn is_seated(&self, player: Player) -> bool {
        player.index() < self.player_count
    }

    /// The player who moves after `player`, wrapping around the seated players.
    pub fn next_player(&self, player: Player) -> Option<Player> {
        if !self.is_seated(player) {
            return None;
        }
        Player::from_index((player.index() + 1) % self.player_count)
    }

    /// Returns true if the position lies on the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Gets the cell at the given position, `None` off the grid.
    pub fn square(&self, pos: Position) -> Option<Square> {
        self.in_bounds(pos).then(|| self.cells[self.cell_index(pos)])
    }

    /// Returns true if the cell is on the grid and empty.
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.square(pos), Some(Square::Empty))
    }

    /// Returns true unless the cell is on the grid and empty.
    ///
    /// Off-grid coordinates count as occupied, never as an error.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.is_free(Position::new(row, col))
    }

    /// Owner of a wall slot, `None` if the slot is empty or off the lattice.
    pub fn wall_at(&self, orientation: Orientation, pos: Position) -> Option<Player> {
        self.wall_index(orientation, pos).and_then(|idx| match orientation {
            Orientation::Vertical => self.vertical_walls[idx],
            Orientation::Horizontal => self.horizontal_walls[idx],
        })
    }

    /// Returns true if the slot lies inside the lattice for `orientation`.
    pub fn wall_in_range(&self, orientation: Orientation, pos: Position) -> bool {
        self.wall_index(orientation, pos).is_some()
    }

    /// Current position of a seated player.
    pub fn position_of(&self, player: Player) -> Option<Position> {
        self.positions[player.index()]
    }

    /// Walls a player may still place. Unseated players have none.
    pub fn remaining_walls(&self, player: Player) -> u8 {
        self.walls_left[player.index()]
    }

    /// Returns true if the player stands on their goal line.
    pub fn has_won(&self, player: Player) -> bool {
        win::has_won(self, player)
    }

    /// Moves a player's token one step.
    ///
    /// The target must be on the grid, empty and reachable in one
    /// unobstructed orthogonal step. Nothing changes on failure.
    #[instrument(skip_all, fields(player = %player, target = %target))]
    pub fn apply_move(&mut self, player: Player, target: Position) -> Result<(), ActionError> {
        let from = legality::validate_move(self, player, target)?;

        let old = self.cell_index(from);
        let new = self.cell_index(target);
        self.cells[old] = Square::Empty;
        self.cells[new] = Square::Occupied(player);
        self.positions[player.index()] = Some(target);
        debug!(%from, "Token moved");
        Ok(())
    }

    /// Marks a wall slot as owned by `player`.
    ///
    /// Walls are never removed. The wall count is not touched; see
    /// [`Board::apply_action`] for the budgeted version.
    #[instrument(skip_all, fields(orientation = ?orientation, slot = %pos, player = %player))]
    pub fn apply_wall(
        &mut self,
        orientation: Orientation,
        pos: Position,
        player: Player,
    ) -> Result<(), ActionError> {
        legality::validate_wall(self, orientation, pos)?;
        let Some(idx) = self.wall_index(orientation, pos) else {
            return Err(ActionError::WallOutOfRange {
                orientation,
                position: pos,
            });
        };
        let slot = match orientation {
            Orientation::Vertical => &mut self.vertical_walls[idx],
            Orientation::Horizontal => &mut self.horizontal_walls[idx],
        };
        *slot = Some(player);
        debug!("Wall placed");
        Ok(())
    }

    /// Takes one wall from a player's supply, stopping at zero.
    pub fn decrement_walls(&mut self, player: Player) {
        let left = &mut self.walls_left[player.index()];
        *left = left.saturating_sub(1);
    }

    /// Applies an action for `player`.
    ///
    /// Wall placements require a wall in hand and consume it only when the
    /// slot accepts the wall. `Pass` always succeeds.
    #[instrument(skip_all, fields(player = %player, action = %action))]
    pub fn apply_action(&mut self, player: Player, action: Action) -> Result<(), ActionError> {
        if !self.is_seated(player) {
            return Err(ActionError::NotSeated(player));
        }
        match action {
            Action::Move(target) => self.apply_move(player, target),
            Action::PlaceWall {
                orientation,
                position,
            } => {
                if self.remaining_walls(player) == 0 {
                    return Err(ActionError::NoWallsLeft(player));
                }
                self.apply_wall(orientation, position, player)?;
                self.decrement_walls(player);
                Ok(())
            }
            Action::Pass => Ok(()),
        }
    }

    /// Serializable copy of the board for renderers.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> BoardSnapshot {
        let chunk = |slots: &[Option<Player>], width: usize| -> Vec<Vec<Option<Player>>> {
            slots.chunks(width).map(<[Option<Player>]>::to_vec).collect()
        };
        BoardSnapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.chunks(self.cols).map(<[Square]>::to_vec).collect(),
            vertical_walls: chunk(&self.vertical_walls, self.cols - 1),
            horizontal_walls: chunk(&self.horizontal_walls, self.cols),
            players: self
                .players()
                .filter_map(|player| {
                    self.position_of(player).map(|position| PlayerSnapshot {
                        player,
                        position,
                        remaining_walls: self.remaining_walls(player),
                    })
                })
                .collect(),
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Vertical walls render as `|` between cells, horizontal walls as `--`
    /// under the cell they border.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..self.cols {
            result.push_str(&format!("{:>3}", col));
        }
        result.push('\n');

        for row in 0..self.rows {
            result.push_str(&format!("{:>2} ", row));
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let symbol = match self.cells[self.cell_index(pos)] {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(' ');
                result.push(symbol);
                if col + 1 < self.cols {
                    let wall = self.wall_at(Orientation::Vertical, pos).is_some();
                    result.push(if wall { '|' } else { ' ' });
                }
            }
            result.push('\n');

            if row + 1 < self.rows {
                result.push_str("    ");
                for col in 0..self.cols {
                    let wall = self
                        .wall_at(Orientation::Horizontal, Position::new(row, col))
                        .is_some();
                    result.push_str(if wall { "--" } else { "  " });
                    result.push(' ');
                }
                result.push('\n');
            }
        }
        result
    }

    fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn wall_index(&self, orientation: Orientation, pos: Position) -> Option<usize> {
        let (rows, cols) = match orientation {
            Orientation::Vertical => (self.rows, self.cols - 1),
            Orientation::Horizontal => (self.rows - 1, self.cols),
        };
        (pos.row < rows && pos.col < cols).then_some(pos.row * cols + pos.col)
    }
}

/// Starting cell for a player on a `rows x cols` grid.
pub fn start_position(player: Player, rows: usize, cols: usize) -> Position {
    match player {
        Player::A => Position::new(rows - 1, cols / 2),
        Player::B => Position::new(0, cols / 2),
        Player::C => Position::new(rows / 2, 0),
        Player::D => Position::new(rows / 2, cols - 1),
    }
}

/// Per-player part of a [`BoardSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// The player.
    pub player: Player,
    /// Where their token stands.
    pub position: Position,
    /// Walls still in hand.
    pub remaining_walls: u8,
}

/// Serializable view of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Cell occupancy, row by row.
    pub cells: Vec<Vec<Square>>,
    /// Vertical wall owners, `rows x (cols - 1)`.
    pub vertical_walls: Vec<Vec<Option<Player>>>,
    /// Horizontal wall owners, `(rows - 1) x cols`.
    pub horizontal_walls: Vec<Vec<Option<Player>>>,
    /// Seated players in join order.
    pub players: Vec<PlayerSnapshot>,
}

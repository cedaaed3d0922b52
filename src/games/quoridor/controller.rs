//! Turn sequencing for a Quoridor match.
//!
//! The controller owns the board, asks each seat's strategy for an
//! action, validates it against the action contract and advances play
//! until someone reaches their goal line.

use super::Player;
use super::action::{Action, ActionError};
use super::board::{Board, SetupError};
use super::contracts::{ActionContract, Contract};
use super::rules::winner;
use super::strategy::{Strategy, StrategyError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Attempts a bot gets to produce a legal action before the match stalls.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Where the match stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to act.
    AwaitingAction(Player),
    /// This player reached their goal line; no further actions are accepted.
    Won(Player),
}

impl Phase {
    /// Returns the winner if the match is over.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(player),
            Phase::AwaitingAction(_) => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingAction(player) => write!(f, "Player {} to act", player),
            Phase::Won(player) => write!(f, "Player {} wins", player),
        }
    }
}

/// An accepted action and who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Turn {
    /// Player who acted.
    pub player: Player,
    /// What they did.
    pub action: Action,
}

/// Error that ends a match early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// The board could not be built.
    #[display("Setup failed: {}", _0)]
    #[from]
    Setup(SetupError),

    /// A strategy failed to produce an action.
    #[display("{}", _0)]
    #[from]
    Strategy(StrategyError),

    /// An action broke the match's invariants or arrived after the end.
    #[display("Action failed: {}", _0)]
    #[from]
    Action(ActionError),

    /// A strategy kept proposing illegal actions.
    #[display("Player {} produced no legal action in {} attempts", player, attempts)]
    Stalled {
        /// Player whose strategy stalled.
        player: Player,
        /// Attempts made.
        attempts: usize,
    },

    /// Seat count does not match the board.
    #[display("Board seats {} players but {} strategies were given", expected, got)]
    SeatMismatch {
        /// Seated players.
        expected: usize,
        /// Strategies supplied.
        got: usize,
    },

    /// The match ran out of turns without a winner.
    #[display("No winner after {} turns", _0)]
    TurnLimit(usize),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Setup(err) => Some(err),
            MatchError::Strategy(err) => Some(err),
            MatchError::Action(err) => Some(err),
            _ => None,
        }
    }
}

/// Sequences turns over a single board.
///
/// Actions are checked against [`ActionContract`] before they touch the
/// board; a rejected action leaves the board, the history and the active
/// player unchanged.
#[derive(Debug, Clone)]
pub struct TurnController {
    pub(super) opening: Board,
    pub(super) board: Board,
    pub(super) phase: Phase,
    pub(super) history: Vec<Turn>,
    pub(super) max_attempts: usize,
    pub(super) max_turns: Option<usize>,
}

impl TurnController {
    /// Starts a match on a standard board.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        Ok(Self::with_board(Board::new(player_count)?))
    }

    /// Starts a match on a prepared board; player A acts first.
    #[instrument(skip(board))]
    pub fn with_board(board: Board) -> Self {
        let phase = match winner(&board) {
            Some(player) => Phase::Won(player),
            None => Phase::AwaitingAction(Player::A),
        };
        Self {
            opening: board.clone(),
            board,
            phase,
            history: Vec::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_turns: None,
        }
    }

    /// Sets how many rejected actions a bot may produce per turn.
    ///
    /// Interactive strategies are not limited.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Caps the match length; [`TurnController::run`] fails once it is reached.
    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board as it was when the match started.
    pub fn opening(&self) -> &Board {
        &self.opening
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to act, or `None` once the match is won.
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingAction(player) => Some(player),
            Phase::Won(_) => None,
        }
    }

    /// Accepted actions in order.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of accepted actions.
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    /// Applies `action` for the active player.
    ///
    /// On success the action is recorded and the phase becomes either
    /// `Won` or the next seated player's turn.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit(&mut self, action: Action) -> Result<Phase, ActionError> {
        ActionContract::pre(self, &action)?;
        let Phase::AwaitingAction(player) = self.phase else {
            return Err(ActionError::GameOver);
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.apply_action(player, action)?;
        self.history.push(Turn::new(player, action));
        self.phase = if self.board.has_won(player) {
            info!(%player, turns = self.history.len(), "Player reached goal line");
            Phase::Won(player)
        } else {
            let next = self.board.next_player(player).unwrap_or(player);
            Phase::AwaitingAction(next)
        };

        #[cfg(debug_assertions)]
        if let Err(err) = ActionContract::post(&before, self) {
            warn!(error = %err, "Postcondition failed, rolling back");
            *self = before;
            return Err(err);
        }

        debug!(%player, %action, phase = %self.phase, "Action accepted");
        Ok(self.phase)
    }

    /// Plays one turn for the active player using `strategy`.
    ///
    /// Rejected actions are reported back through [`Strategy::rejected`] and
    /// the strategy is asked again. Bots get up to the attempt limit;
    /// interactive strategies are asked until they produce a legal action.
    #[instrument(skip_all, fields(seat = strategy.name(), phase = %self.phase))]
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<Phase, MatchError> {
        let Phase::AwaitingAction(player) = self.phase else {
            return Err(ActionError::GameOver.into());
        };
        let limit = (!strategy.is_interactive()).then_some(self.max_attempts);

        let mut attempt = 0;
        while limit.is_none_or(|limit| attempt < limit) {
            attempt += 1;
            let action = strategy.decide(&self.board, player)?;
            match self.submit(action) {
                Ok(phase) => return Ok(phase),
                Err(err @ ActionError::InvariantViolation(_)) => return Err(err.into()),
                Err(err) => {
                    warn!(%player, %action, attempt, error = %err, "Action rejected");
                    strategy.rejected(action, &err);
                }
            }
        }

        Err(MatchError::Stalled {
            player,
            attempts: self.max_attempts,
        })
    }

    /// Plays until someone wins, with one strategy per seated player in join order.
    pub fn run(&mut self, seats: &mut [Box<dyn Strategy>]) -> Result<Player, MatchError> {
        self.run_observed(seats, |_| {})
    }

    /// Like [`TurnController::run`], calling `observe` after every accepted action.
    #[instrument(skip_all, fields(seats = seats.len()))]
    pub fn run_observed<F>(
        &mut self,
        seats: &mut [Box<dyn Strategy>],
        mut observe: F,
    ) -> Result<Player, MatchError>
    where
        F: FnMut(&TurnController),
    {
        let expected = self.board.player_count();
        if seats.len() != expected {
            return Err(MatchError::SeatMismatch {
                expected,
                got: seats.len(),
            });
        }

        loop {
            let player = match self.phase {
                Phase::Won(player) => {
                    info!(%player, turns = self.history.len(), "Match finished");
                    return Ok(player);
                }
                Phase::AwaitingAction(player) => player,
            };

            if let Some(limit) = self.max_turns
                && self.history.len() >= limit
            {
                return Err(MatchError::TurnLimit(limit));
            }

            let seat = seats
                .get_mut(player.index())
                .ok_or(MatchError::SeatMismatch { expected, got: expected })?;
            self.play_turn(seat.as_mut())?;
            observe(self);
        }
    }
}

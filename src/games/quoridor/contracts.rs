//! Contract-based validation for Quoridor actions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Action, ActionError};
use super::controller::{Phase, TurnController};
use super::invariants::{InvariantSet, QuoridorInvariants};
use super::rules::{validate_move, validate_wall};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Action Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match has not been won yet.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Fails with [`ActionError::GameOver`] once a player has won.
    #[instrument(skip(game))]
    pub fn check(game: &TurnController) -> Result<(), ActionError> {
        match game.phase() {
            Phase::AwaitingAction(_) => Ok(()),
            Phase::Won(_) => Err(ActionError::GameOver),
        }
    }
}

/// Precondition: a wall placement is paid for and fits the lattice.
pub struct WallAffordable;

impl WallAffordable {
    /// Checks the wall budget of the player to act, then the slot.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &TurnController) -> Result<(), ActionError> {
        let Action::PlaceWall {
            orientation,
            position,
        } = *action
        else {
            return Ok(());
        };
        let Phase::AwaitingAction(player) = game.phase() else {
            return Err(ActionError::GameOver);
        };
        if game.board().remaining_walls(player) == 0 {
            return Err(ActionError::NoWallsLeft(player));
        }
        validate_wall(game.board(), orientation, position)
    }
}

/// Precondition: a token move is an unobstructed orthogonal step.
pub struct StepIsLegal;

impl StepIsLegal {
    /// Runs the movement checks for the player to act.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &TurnController) -> Result<(), ActionError> {
        let Action::Move(target) = *action else {
            return Ok(());
        };
        let Phase::AwaitingAction(player) = game.phase() else {
            return Err(ActionError::GameOver);
        };
        validate_move(game.board(), player, target).map(|_| ())
    }
}

/// Composite precondition: an action is legal for the player to act.
pub struct LegalAction;

impl LegalAction {
    /// Validates all preconditions for an action.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &TurnController) -> Result<(), ActionError> {
        MatchInProgress::check(game)?;
        StepIsLegal::check(action, game)?;
        WallAffordable::check(action, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for submitted actions.
///
/// Preconditions:
/// - Match still in progress
/// - Moves are single unblocked steps onto free cells
/// - Walls are paid for and go into open slots
///
/// Postconditions:
/// - Tokens and cells agree
/// - Walls are only ever added
/// - Wall budget matches the history
pub struct ActionContract;

impl Contract<TurnController, Action> for ActionContract {
    fn pre(game: &TurnController, action: &Action) -> Result<(), ActionError> {
        LegalAction::check(action, game)
    }

    fn post(before: &TurnController, after: &TurnController) -> Result<(), ActionError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one turn"
            );
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one turn".to_string(),
            ));
        }

        QuoridorInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

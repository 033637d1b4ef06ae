//! Contract-based validation for reducer transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::ReduceError;
use super::invariants::{GameStateInvariants, InvariantSet};
use super::position::Position;
use super::rules::detect_win;
use super::state::GameState;
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
    fn pre(state: &S, action: &A) -> Result<(), ReduceError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ReduceError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the viewed board has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`ReduceError::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), ReduceError> {
        match detect_win(state.board()) {
            Some(_) => Err(ReduceError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`ReduceError::SquareOccupied`] on a marked square.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), ReduceError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(ReduceError::SquareOccupied { position })
        }
    }
}

/// Composite precondition for a move: index on the board, game still open,
/// square empty. Returns the validated position.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, ReduceError> {
        let position = Position::from_index(index).ok_or(ReduceError::OutOfBounds { index })?;
        GameNotOver::check(state)?;
        SquareIsEmpty::check(position, state)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Index names a board cell
/// - No winner on the viewed board
/// - Square is empty
///
/// Postconditions:
/// - History grew to exactly one entry past the viewed step
/// - All [`GameStateInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), ReduceError> {
        LegalMove::check(*index, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ReduceError> {
        if after.history().len() != before.step_number() + 2 {
            warn!(
                before_step = before.step_number(),
                after_len = after.history().len(),
                "Move did not append after the viewed step"
            );
            return Err(ReduceError::InvariantViolation(
                "Postcondition failed: history not truncated to the viewed step".to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for time travel: the target step must exist, and history is
/// never touched.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), ReduceError> {
        let len = state.history().len();
        if *step < len {
            Ok(())
        } else {
            Err(ReduceError::StepOutOfRange { step: *step, len })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ReduceError> {
        if before.history() != after.history() {
            return Err(ReduceError::InvariantViolation(
                "Postcondition failed: jump modified history".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Runs the full invariant set, folding violations into one error.
#[instrument(skip(state))]
pub fn check_invariants(state: &GameState) -> Result<(), ReduceError> {
    GameStateInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Game state invariants violated");
        ReduceError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

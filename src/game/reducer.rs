//! The game reducer: `(state, action) -> state`.
//!
//! Every transition builds a fresh [`GameState`]; the input is never
//! mutated. [`try_reduce`] enforces move and jump preconditions and reports
//! [`ReduceError`]. [`reduce`] is the total form used by the store: a
//! rejected action logs a warning and yields the input state unchanged.

use super::action::{Action, ReduceError};
use super::contracts::{Contract, JumpContract, LegalMove, MoveContract};
use super::position::Position;
use super::state::{GameState, HistoryEntry};
use crate::store::Reducer;
use tracing::{debug, instrument, warn};

/// Applies `action`, failing on an illegal move or jump.
#[instrument(skip(state), fields(step = state.step_number(), len = state.history().len()))]
pub fn try_reduce(state: &GameState, action: &Action) -> Result<GameState, ReduceError> {
    match *action {
        Action::Move { id } => {
            let position = LegalMove::check(id, state)?;
            let next = play(state, position);
            MoveContract::post(state, &next)?;
            Ok(next)
        }
        Action::JumpToMove { step } => {
            JumpContract::pre(state, &step)?;
            let next = jump(state, step);
            JumpContract::post(state, &next)?;
            Ok(next)
        }
        Action::ChangeOrder => Ok(order(state, !state.ascending())),
        Action::SetOrder { ascending } => Ok(order(state, ascending)),
        Action::Unknown => {
            debug!("Ignoring unrecognized action");
            Ok(state.clone())
        }
    }
}

/// Applies `action`; rejected actions leave the state unchanged.
#[instrument(skip(state))]
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    try_reduce(state, action).unwrap_or_else(|error| {
        warn!(%error, %action, "Action rejected, state unchanged");
        state.clone()
    })
}

/// Marks `position` for the player to move, discarding any future history.
///
/// Callers check legality first.
pub(crate) fn play(state: &GameState, position: Position) -> GameState {
    let mut next = state.clone();
    let entry = HistoryEntry::after_move(state.board(), position, state.next_player());
    next.push_after_current(entry);
    debug!(
        position = %position,
        player = %state.next_player(),
        step = next.step_number(),
        "Move applied"
    );
    next
}

/// Views history entry `step` without truncating.
pub(crate) fn jump(state: &GameState, step: usize) -> GameState {
    let mut next = state.clone();
    next.set_step(step);
    debug!(step, "Jumped to step");
    next
}

fn order(state: &GameState, ascending: bool) -> GameState {
    let mut next = state.clone();
    next.set_ascending(ascending);
    next
}

/// [`Reducer`] for the store variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Action = Action;

    fn reduce(&self, state: &GameState, action: &Action) -> GameState {
        reduce(state, action)
    }
}

//! First-class action types for tic-tac-toe.
//!
//! Actions are the wire protocol between the view layer and the reducer.
//! They serialize with a `type` tag (`MOVE`, `JUMP_TO_MOVE`, `CHANGE_ORDER`,
//! `SET_ORDER`); any other tag decodes to [`Action::Unknown`], which the
//! reducer treats as a no-op.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// An intent dispatched to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Mark the cell at board index `id` for the player to move.
    Move {
        /// Board index (0-8).
        id: usize,
    },
    /// View history entry `step` and play on from there.
    JumpToMove {
        /// History index to view.
        #[serde(rename = "move")]
        step: usize,
    },
    /// Flip the move list ordering.
    ChangeOrder,
    /// Set the move list ordering explicitly.
    SetOrder {
        /// `true` for ascending.
        ascending: bool,
    },
    /// Any unrecognized action type.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Move action for a position.
    pub fn play(pos: Position) -> Self {
        Action::Move { id: pos.to_index() }
    }

    /// Jump action for a history step.
    pub fn jump(step: usize) -> Self {
        Action::JumpToMove { step }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { id } => write!(f, "MOVE {}", id),
            Action::JumpToMove { step } => write!(f, "JUMP_TO_MOVE {}", step),
            Action::ChangeOrder => write!(f, "CHANGE_ORDER"),
            Action::SetOrder { ascending } => write!(f, "SET_ORDER ascending={}", ascending),
            Action::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReduceError {
    /// The move index is not a board cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", position)]
    SquareOccupied {
        /// The occupied position.
        position: Position,
    },

    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The jump target is past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ReduceError {}

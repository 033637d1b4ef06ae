//! Tic-tac-toe game logic: board, history, reducer, and derived status.

mod action;
mod contracts;
mod position;
mod reducer;
mod state;
mod status;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Action, ReduceError};
pub use contracts::{
    Contract, GameNotOver, JumpContract, LegalMove, MoveContract, SquareIsEmpty, check_invariants,
};
pub use position::{Location, Position};
pub use reducer::{GameReducer, reduce, try_reduce};
pub(crate) use reducer::{jump, play};
pub use rules::{WinningLine, detect_win, is_draw, is_full};
pub use state::{GameState, HistoryEntry};
pub use status::Status;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};

//! Status derived from game state.

use super::rules::{detect_win, is_full};
use super::state::GameState;
use super::types::Player;
use serde::Serialize;
use tracing::instrument;

/// What the status line says about the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of the board at the viewed step.
    #[instrument(skip(state))]
    pub fn of(state: &GameState) -> Self {
        let board = state.board();
        if let Some(line) = detect_win(board) {
            Status::Winner(line.player())
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(state.next_player())
        }
    }

    /// Whether no further moves are allowed from this board.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

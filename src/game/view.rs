//! Read-only projection of game state for the view layer.

use super::position::Location;
use super::rules::{WinningLine, detect_win};
use super::state::GameState;
use super::status::Status;
use super::types::Board;
use serde::Serialize;
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this row jumps to.
    pub step: usize,
    /// Location of the move that produced the entry.
    pub location: Option<Location>,
    /// Whether this is the viewed step.
    pub is_current: bool,
    /// Button text.
    pub description: String,
}

impl MoveEntry {
    /// Text for the jump button of history entry `step`.
    pub fn describe(step: usize, location: Option<Location>) -> String {
        match (step, location) {
            (0, _) => "Go to game start".to_string(),
            (n, Some(loc)) => format!("Go to move #{} - {}", n, loc),
            (n, None) => format!("Go to move #{}", n),
        }
    }
}

/// Everything a renderer needs, derived from one [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board at the viewed step.
    pub board: Board,
    /// Completed line on that board, if any.
    pub winner: Option<WinningLine>,
    /// Derived status.
    pub status: Status,
    /// Status line text.
    pub status_text: String,
    /// Viewed step.
    pub step_number: usize,
    /// Move list order.
    pub ascending: bool,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects `state` for rendering.
    #[instrument(skip(state))]
    pub fn of(state: &GameState) -> Self {
        let step_number = *state.step_number();
        let mut moves: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry {
                step,
                location: *entry.location(),
                is_current: step == step_number,
                description: MoveEntry::describe(step, *entry.location()),
            })
            .collect();
        if !state.ascending() {
            moves.reverse();
        }

        let status = Status::of(state);
        Self {
            board: *state.board(),
            winner: detect_win(state.board()),
            status,
            status_text: status.to_string(),
            step_number,
            ascending: *state.ascending(),
            moves,
        }
    }

    /// Plain-text rendering: board, status line, then the move list with
    /// the viewed step marked by `>`.
    pub fn render_text(&self) -> String {
        let mut out = self.board.display();
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { ">" } else { " " };
            out.push_str(&format!("\n{} {}", marker, entry.description));
        }
        out
    }
}

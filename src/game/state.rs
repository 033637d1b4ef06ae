//! Game state snapshots: the board history and the step being viewed.

use super::position::{Location, Position};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One board snapshot plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played; `None` for the opening entry.
    location: Option<Location>,
}

impl HistoryEntry {
    /// The opening entry: an empty board with no move.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Entry for `player` marking `pos` on top of `board`.
    pub fn after_move(board: &Board, pos: Position, player: Player) -> Self {
        Self::new(board.with_mark(pos, player), Some(pos.location()))
    }
}

/// Complete game state.
///
/// States are values: every action produces a new `GameState` and leaves the
/// previous one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct GameState {
    /// Boards in play order; index 0 is always the empty board.
    history: Vec<HistoryEntry>,
    /// Index into `history` currently being viewed or played from.
    step_number: usize,
    /// Whether X moves next from the viewed step.
    x_is_next: bool,
    /// Move list display order.
    ascending: bool,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a new game with the given move list ordering.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step_number: 0,
            x_is_next: true,
            ascending,
        }
    }

    /// The history entry at `step_number`.
    pub fn current(&self) -> &HistoryEntry {
        // `step_number` is kept within history by every transition.
        &self.history[self.step_number.min(self.history.len() - 1)]
    }

    /// The board at `step_number`.
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Player to move from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::next(self.x_is_next)
    }

    /// Moves the step pointer.
    pub(crate) fn set_step(&mut self, step: usize) {
        self.step_number = step;
        self.x_is_next = step % 2 == 0;
    }

    /// Drops entries after the viewed step and appends `entry`, viewing it.
    pub(crate) fn push_after_current(&mut self, entry: HistoryEntry) {
        self.history.truncate(self.step_number + 1);
        self.history.push(entry);
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
    }

    /// Sets the move list display order.
    pub(crate) fn set_ascending(&mut self, ascending: bool) {
        self.ascending = ascending;
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.history
    }

    #[cfg(test)]
    pub(crate) fn force_x_is_next(&mut self, x_is_next: bool) {
        self.x_is_next = x_is_next;
    }

    #[cfg(test)]
    pub(crate) fn force_step(&mut self, step: usize) {
        self.step_number = step;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

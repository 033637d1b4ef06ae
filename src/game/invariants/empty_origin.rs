//! Empty origin invariant: history starts from a blank board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `history[0]` is the empty board with no move location.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|entry| entry.board().is_blank() && entry.location().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

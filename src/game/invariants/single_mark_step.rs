//! Single mark invariant: each history step adds exactly one mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every `history[i]` (i > 0) differs from `history[i-1]` in
/// exactly one square, which went from empty to the mover's mark, and the
/// entry's location names that square.
///
/// X owns the odd steps and O the even ones.
pub struct SingleMarkStepInvariant;

impl Invariant<GameState> for SingleMarkStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let changed: Vec<Position> = Position::iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();
                let [pos] = changed.as_slice() else {
                    return false;
                };
                let mover = Player::mover_of(i + 1);
                before.get(*pos) == Square::Empty
                    && after.get(*pos).player() == mover
                    && *pair[1].location() == Some(pos.location())
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark for the mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, HistoryEntry, reduce};

    #[test]
    fn test_reduced_game_holds() {
        let mut state = GameState::new();
        for id in [4, 0, 8, 2] {
            state = reduce(&state, &Action::Move { id });
        }
        assert!(SingleMarkStepInvariant::holds(&state));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut state = reduce(&GameState::new(), &Action::Move { id: 4 });
        let board = state.board().with_mark(Position::TopLeft, Player::O);
        state.history_mut()[1] = HistoryEntry::new(board, Some(Position::Center.location()));
        assert!(!SingleMarkStepInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut state = GameState::new();
        let entry = HistoryEntry::after_move(state.board(), Position::Center, Player::O);
        state.history_mut().push(entry);
        assert!(!SingleMarkStepInvariant::holds(&state));
    }

    #[test]
    fn test_mismatched_location_violates() {
        let mut state = reduce(&GameState::new(), &Action::Move { id: 4 });
        let board = *state.board();
        state.history_mut()[1] = HistoryEntry::new(board, Some(Position::TopLeft.location()));
        assert!(!SingleMarkStepInvariant::holds(&state));
    }
}

//! Component-local variant: the game owns its state and guards its own clicks.

use crate::game::{GameState, Position, detect_win, jump, play};
use tracing::{debug, instrument};

/// Game holding its state directly, with no reducer or store in between.
///
/// Click handling checks the board itself and silently ignores clicks that
/// cannot be played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalGame {
    state: GameState,
}

impl LocalGame {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given move list ordering.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            state: GameState::with_order(ascending),
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays cell `index` for the player to move.
    ///
    /// Returns false, leaving the game untouched, if the index is off the
    /// board, the square is taken, or the viewed board already has a winner.
    #[instrument(skip(self), fields(step = self.state.step_number()))]
    pub fn handle_click(&mut self, index: usize) -> bool {
        let Some(position) = Position::from_index(index) else {
            debug!("Click outside the board ignored");
            return false;
        };
        if detect_win(self.state.board()).is_some() || !self.state.board().is_empty(position) {
            debug!(%position, "Click ignored");
            return false;
        }
        self.state = play(&self.state, position);
        true
    }

    /// Views history entry `step`. Out-of-range steps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.state.history().len() {
            debug!(len = self.state.history().len(), "Jump past end of history ignored");
            return false;
        }
        self.state = jump(&self.state, step);
        true
    }

    /// Sets the move list ordering.
    #[instrument(skip(self))]
    pub fn set_ascending(&mut self, ascending: bool) {
        let mut next = self.state.clone();
        next.set_ascending(ascending);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Square};

    #[test]
    fn test_click_plays_and_alternates() {
        let mut game = LocalGame::new();
        assert!(game.handle_click(4));
        assert!(game.handle_click(0));
        assert_eq!(game.state().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.state().board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_click_on_occupied_is_ignored() {
        let mut game = LocalGame::new();
        game.handle_click(4);
        let before = game.clone();
        assert!(!game.handle_click(4));
        assert_eq!(game, before);
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let mut game = LocalGame::new();
        for id in [0, 3, 1, 4, 2] {
            assert!(game.handle_click(id));
        }
        assert!(!game.handle_click(8));
        assert_eq!(game.state().history().len(), 6);
    }

    #[test]
    fn test_click_off_board_is_ignored() {
        let mut game = LocalGame::new();
        assert!(!game.handle_click(9));
        assert_eq!(game.state().history().len(), 1);
    }

    #[test]
    fn test_jump_and_order() {
        let mut game = LocalGame::new();
        game.handle_click(4);
        assert!(game.jump_to(0));
        assert!(!game.jump_to(5));
        assert_eq!(*game.state().step_number(), 0);

        game.set_ascending(false);
        assert!(!*game.state().ascending());
    }
}

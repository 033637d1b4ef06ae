//! Common interface over the local and store variants.

use crate::config::AppConfig;
use crate::game::{Action, GameReducer, GameState, GameView};
use crate::local::LocalGame;
use crate::store::{LoggerMiddleware, Store};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which implementation drives the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// State lives in the game object.
    #[default]
    #[display("local")]
    Local,
    /// State lives in a reducer store with logging middleware.
    #[display("store")]
    Store,
}

/// Operations the front ends need from either variant.
pub trait GameSession {
    /// Which variant this is.
    fn variant(&self) -> Variant;

    /// The current state.
    fn state(&self) -> &GameState;

    /// Plays cell `index` for the player to move. Illegal moves are ignored.
    fn play(&mut self, index: usize);

    /// Views history entry `step`. Out-of-range steps are ignored.
    fn jump_to(&mut self, step: usize);

    /// Flips the move list ordering.
    fn toggle_order(&mut self);

    /// Sets the move list ordering.
    fn set_order(&mut self, ascending: bool);

    /// Applies a protocol action.
    fn apply(&mut self, action: &Action) {
        match *action {
            Action::Move { id } => self.play(id),
            Action::JumpToMove { step } => self.jump_to(step),
            Action::ChangeOrder => self.toggle_order(),
            Action::SetOrder { ascending } => self.set_order(ascending),
            Action::Unknown => {}
        }
    }

    /// Projection for rendering.
    fn view(&self) -> GameView {
        GameView::of(self.state())
    }
}

impl GameSession for LocalGame {
    fn variant(&self) -> Variant {
        Variant::Local
    }

    fn state(&self) -> &GameState {
        LocalGame::state(self)
    }

    fn play(&mut self, index: usize) {
        self.handle_click(index);
    }

    fn jump_to(&mut self, step: usize) {
        LocalGame::jump_to(self, step);
    }

    fn toggle_order(&mut self) {
        let ascending = !*LocalGame::state(self).ascending();
        self.set_ascending(ascending);
    }

    fn set_order(&mut self, ascending: bool) {
        self.set_ascending(ascending);
    }
}

impl GameSession for Store<GameReducer> {
    fn variant(&self) -> Variant {
        Variant::Store
    }

    fn state(&self) -> &GameState {
        Store::state(self)
    }

    fn play(&mut self, index: usize) {
        self.dispatch(Action::Move { id: index });
    }

    fn jump_to(&mut self, step: usize) {
        self.dispatch(Action::JumpToMove { step });
    }

    fn toggle_order(&mut self) {
        self.dispatch(Action::ChangeOrder);
    }

    fn set_order(&mut self, ascending: bool) {
        self.dispatch(Action::SetOrder { ascending });
    }

    fn apply(&mut self, action: &Action) {
        self.dispatch(*action);
    }
}

/// Builds a fresh session of `variant` configured by `config`.
#[instrument(skip(config))]
pub fn new_session(variant: Variant, config: &AppConfig) -> Box<dyn GameSession> {
    info!(ascending = config.ascending(), "Starting new game");
    match variant {
        Variant::Local => Box::new(LocalGame::with_order(*config.ascending())),
        Variant::Store => {
            let mut store = Store::new(GameReducer, GameState::with_order(*config.ascending()));
            if *config.log_actions() {
                store.add_middleware(LoggerMiddleware::new());
            }
            Box::new(store)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_agree_on_script() {
        let script = [
            Action::Move { id: 0 },
            Action::Move { id: 4 },
            Action::Move { id: 4 },
            Action::Move { id: 8 },
            Action::jump(1),
            Action::Move { id: 5 },
            Action::ChangeOrder,
            Action::Unknown,
            Action::jump(7),
        ];
        let config = AppConfig::default();
        let mut local = new_session(Variant::Local, &config);
        let mut store = new_session(Variant::Store, &config);
        for action in &script {
            local.apply(action);
            store.apply(action);
            assert_eq!(local.state(), store.state(), "diverged after {}", action);
        }
        assert_eq!(local.state().history().len(), 3);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Store.to_string(), "store");
        assert_eq!(new_session(Variant::Store, &AppConfig::default()).variant(), Variant::Store);
    }
}

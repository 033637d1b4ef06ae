//! Alternating turn invariant: X moves on even steps, O on odd ones.

use super::super::GameState;
use super::Invariant;

/// Invariant: `x_is_next` agrees with the parity of `step_number`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        *state.x_is_next() == (*state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X moves next exactly on even steps"
    }
}

//! Step bounds invariant: the viewed step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        *state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Viewed step lies within history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new();
        assert!(StepInBoundsInvariant::holds(&state));
        state.force_step(1);
        assert!(!StepInBoundsInvariant::holds(&state));
    }
}

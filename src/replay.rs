//! Headless replay of an action script.
//!
//! Scripts are JSON arrays of protocol actions, for example
//! `[{"type": "MOVE", "id": 4}, {"type": "JUMP_TO_MOVE", "move": 0}]`.

use crate::game::{Action, GameView};
use crate::session::GameSession;
use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Error reading an action script.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for ReplayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid action script: {}", err))
    }
}

/// Parses an action script.
#[instrument(skip(content))]
pub fn parse_actions(content: &str) -> Result<Vec<Action>, ReplayError> {
    let actions: Vec<Action> = serde_json::from_str(content)?;
    debug!(count = actions.len(), "Parsed action script");
    Ok(actions)
}

/// Reads and parses an action script file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_actions(path: impl AsRef<Path>) -> Result<Vec<Action>, ReplayError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ReplayError::new(format!("Failed to read action script: {}", e)))?;
    parse_actions(&content)
}

/// Applies `actions` in order and returns the resulting view.
#[instrument(skip_all, fields(variant = %session.variant(), count = actions.len()))]
pub fn run(session: &mut dyn GameSession, actions: &[Action]) -> GameView {
    for action in actions {
        session.apply(action);
    }
    let view = session.view();
    info!(status = %view.status_text, step = view.step_number, "Replay finished");
    view
}

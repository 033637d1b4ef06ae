//! Tic-tac-toe with move history time travel.
//!
//! The game comes in two variants that share one pure core:
//!
//! - **Local**: [`LocalGame`] owns its [`GameState`] and validates clicks itself.
//! - **Store**: a [`Store`] runs every [`Action`] through [`GameReducer`],
//!   with [`LoggerMiddleware`] tracing each transition.
//!
//! Winner, draw, and status text are never stored; [`detect_win`],
//! [`Status`], and [`GameView`] derive them from the viewed history step.
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{Action, GameState, Status, reduce};
//!
//! let state = reduce(&GameState::new(), &Action::Move { id: 4 });
//! let state = reduce(&state, &Action::Move { id: 0 });
//! let state = reduce(&state, &Action::JumpToMove { step: 1 });
//! assert_eq!(Status::of(&state).to_string(), "Next player: O");
//! assert_eq!(state.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod local;
mod replay;
mod session;
mod store;
mod tui;

// Crate-level exports - Game logic
pub use game::{
    Action, Board, Contract, GameNotOver, GameReducer, GameState, GameView, HistoryEntry,
    JumpContract, LegalMove, Location, MoveContract, MoveEntry, Player, Position, ReduceError,
    Square, SquareIsEmpty, Status, WinningLine, check_invariants, detect_win, is_draw, is_full,
    reduce, try_reduce,
};

// Crate-level exports - Rules and invariants
pub use game::invariants::{
    AlternatingTurnInvariant, EmptyOriginInvariant, GameStateInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleMarkStepInvariant, StepInBoundsInvariant,
};
pub use game::rules::LINES;

// Crate-level exports - Variants
pub use local::LocalGame;
pub use session::{GameSession, Variant, new_session};
pub use store::{LoggerMiddleware, Middleware, Reducer, Store, SubscriptionId};

// Crate-level exports - Configuration and replay
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayError, load_actions, parse_actions, run as replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, move_cursor, run_tui};

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Neither the winner nor
//! the draw flag is stored in game state; both are derived on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, detect_win};

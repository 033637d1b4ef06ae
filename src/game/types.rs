//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is when `x_is_next` has the given value.
    pub fn next(x_is_next: bool) -> Self {
        if x_is_next { Player::X } else { Player::O }
    }

    /// Returns the player who made the move producing history entry `step`.
    ///
    /// X plays the odd steps, O the even ones. Step 0 has no mover.
    pub fn mover_of(step: usize) -> Option<Self> {
        match step {
            0 => None,
            s if s % 2 == 1 => Some(Player::X),
            _ => Some(Player::O),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Display symbol for the square (`X`, `O`, or a blank).
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => " ",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: copying one never aliases the squares of another,
/// so every history entry owns its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns true when no square is occupied.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a move prompt.
    pub fn display(&self) -> String {
        self.render_grid(3, 3)
    }

    /// Renders `rows` x `cols` squares in row-major order.
    ///
    /// Cells beyond the nine board squares are left out, so a smaller grid
    /// renders a prefix of the board.
    pub fn render_grid(&self, rows: usize, cols: usize) -> String {
        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let cells: Vec<String> = (0..cols)
                .map(|col| row * cols + col)
                .filter(|&idx| idx < self.squares.len())
                .map(|idx| match self.squares[idx] {
                    Square::Empty => (idx + 1).to_string(),
                    occupied => occupied.symbol().to_string(),
                })
                .collect();
            if cells.is_empty() {
                break;
            }
            lines.push(cells.join("|"));
        }
        let separator = format!("\n{}\n", vec!["-"; cols].join("+"));
        lines.join(&separator)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_blank());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_mover_of_alternates() {
        assert_eq!(Player::mover_of(0), None);
        assert_eq!(Player::mover_of(1), Some(Player::X));
        assert_eq!(Player::mover_of(2), Some(Player::O));
        assert_eq!(Player::mover_of(9), Some(Player::X));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_render_grid_partial() {
        let board = Board::new().with_mark(Position::TopCenter, Player::O);
        assert_eq!(board.render_grid(1, 3), "1|O|3");
    }
}

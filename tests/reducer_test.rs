//! Tests for the game reducer and win detection.

use tictactoe_timetravel::{
    Action, Board, GameState, GameStateInvariants, InvariantSet, Location, Player, Position,
    ReduceError, Square, Status, detect_win, reduce, try_reduce,
};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(marks.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

fn play_all(ids: &[usize]) -> GameState {
    ids.iter()
        .fold(GameState::new(), |state, &id| reduce(&state, &Action::Move { id }))
}

#[test]
fn test_top_row_win() {
    let line = detect_win(&board_from("XXX......")).expect("Expected a winning line");
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_main_diagonal_win() {
    let line = detect_win(&board_from("XOXOXOOXX")).expect("Expected a winning line");
    assert_eq!(line.indices(), [0, 4, 8]);
    assert_eq!(line.player(), Player::X);
}

#[test]
fn test_every_line_is_detected() {
    for line in tictactoe_timetravel::LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(detect_win(&board).map(|l| l.positions()), Some(line));
    }
}

#[test]
fn test_open_board_without_line_is_next_player() {
    for marks in [".........", "XO.......", "XOXOX....", "XXOOOXX.."] {
        let board = board_from(marks);
        assert_eq!(detect_win(&board), None, "{}", marks);
    }
    let state = play_all(&[0, 1, 4]);
    assert_eq!(Status::of(&state), Status::NextPlayer(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(detect_win(state.board()), None);
    assert_eq!(Status::of(&state).to_string(), "Draw");
}

#[test]
fn test_first_move_in_center() {
    let state = reduce(&GameState::new(), &Action::Move { id: 4 });
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history()[1].board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(*state.step_number(), 1);
    assert!(!*state.x_is_next());
    assert_eq!(*state.history()[1].location(), Some(Location { col: 1, row: 1 }));
}

#[test]
fn test_jump_back_then_move_discards_future() {
    let state = play_all(&[0, 4, 8]);
    assert_eq!(state.history().len(), 4);
    assert_eq!(*state.step_number(), 3);

    let state = reduce(&state, &Action::JumpToMove { step: 1 });
    let state = reduce(&state, &Action::Move { id: 5 });
    assert_eq!(state.history().len(), 3);
    assert!(GameStateInvariants::check_all(&state).is_ok());
}

#[test]
fn test_change_order_twice_restores() {
    let state = play_all(&[3]);
    let twice = reduce(&reduce(&state, &Action::ChangeOrder), &Action::ChangeOrder);
    assert_eq!(*twice.ascending(), *state.ascending());
    assert_eq!(twice, state);
}

#[test]
fn test_unknown_action_leaves_every_field() {
    let state = reduce(&play_all(&[0, 4, 8]), &Action::JumpToMove { step: 2 });
    let action: Action = serde_json::from_str(r#"{"type":"UNDO"}"#).unwrap();
    assert_eq!(reduce(&state, &action), state);
}

#[test]
fn test_illegal_moves_rejected() {
    let state = play_all(&[4]);
    assert_eq!(
        try_reduce(&state, &Action::Move { id: 4 }),
        Err(ReduceError::SquareOccupied { position: Position::Center })
    );
    assert_eq!(
        try_reduce(&state, &Action::Move { id: 12 }),
        Err(ReduceError::OutOfBounds { index: 12 })
    );
    assert_eq!(reduce(&state, &Action::Move { id: 12 }), state);

    let won = play_all(&[0, 3, 1, 4, 2]);
    assert_eq!(try_reduce(&won, &Action::Move { id: 8 }), Err(ReduceError::GameOver));
    assert_eq!(reduce(&won, &Action::Move { id: 8 }), won);
}

#[test]
fn test_history_entries_are_independent() {
    let state = play_all(&[0, 4]);
    assert!(state.history()[0].board().is_blank());
    assert_eq!(state.history()[1].board().occupied_count(), 1);
    assert_eq!(state.history()[2].board().occupied_count(), 2);
}

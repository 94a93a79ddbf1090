use super::*;
use crate::error::{Error, InvalidMove};
use crate::rules::Outcome;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_cell_mark() {
    assert_eq!(Cell::Empty.mark(), None);
    assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
    assert!(Cell::default().is_empty());
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);
    assert_eq!(Pos::from_index(4), Some(pos));
    assert_eq!(Pos::from_index(9), None);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.empty_cells().count(), 9);
    assert!(!board.is_full());
}

#[test]
fn test_apply_move_is_pure() {
    let board = Board::new();
    let next = board.apply_move(4, Mark::X).unwrap();

    assert_eq!(board, Board::new());
    assert_eq!(next.get(4), Some(Cell::Mark(Mark::X)));
    assert_eq!(next.mark_count(), 1);
}

#[test]
fn test_apply_move_rejects_occupied() {
    let board = Board::new().apply_move(0, Mark::X).unwrap();
    assert_eq!(
        board.apply_move(0, Mark::O),
        Err(InvalidMove::Occupied { index: 0 })
    );
}

#[test]
fn test_apply_move_rejects_out_of_range() {
    let board = Board::new();
    let err = board.apply_move(9, Mark::X).unwrap_err();
    assert_eq!(err, InvalidMove::OutOfRange { index: 9 });
    assert_eq!(err.index(), 9);
}

#[test]
fn test_place_then_undo_restores() {
    let original: Board = "XO. ... ...".parse().unwrap();
    let mut board = original;

    board.place_mark(5, Mark::X).unwrap();
    assert_ne!(board, original);
    board.undo_move(5);
    assert_eq!(board, original);
}

#[test]
fn test_failed_place_leaves_board() {
    let original: Board = "XO. ... ...".parse().unwrap();
    let mut board = original;
    assert!(board.place_mark(1, Mark::X).is_err());
    assert_eq!(board, original);
}

#[test]
fn test_empty_cells_ascending() {
    let board: Board = "X.O .X. O..".parse().unwrap();
    let empty: Vec<usize> = board.empty_cells().collect();
    assert_eq!(empty, vec![1, 3, 5, 7, 8]);
}

#[test]
fn test_counts() {
    let board: Board = "XOX .O. ...".parse().unwrap();
    assert_eq!(board.count(Mark::X), 2);
    assert_eq!(board.count(Mark::O), 2);
    assert_eq!(board.mark_count(), 4);
}

#[test]
fn test_display_and_parse_back() {
    let board: Board = "XO. .X. ..O".parse().unwrap();
    let text = board.to_string();
    assert_eq!(text, "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    assert_eq!(text.parse::<Board>().unwrap(), board);
}

#[test]
fn test_compact_form() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(board.to_compact(), "XX.OO....");
    assert_eq!(board.to_compact().parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_bad_length() {
    let err = "XO".parse::<Board>().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidBoardLength { expected: 9, got: 2, .. }
    ));
}

#[test]
fn test_parse_bad_character() {
    let err = "XO?......".parse::<Board>().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCellCharacter { character: '?', position: 2, .. }
    ));
}

#[test]
fn test_game_state_alternates() {
    let mut state = GameState::new();
    assert_eq!(state.turn(), Mark::X);

    assert_eq!(state.play(4), Ok(Outcome::InProgress));
    assert_eq!(state.turn(), Mark::O);
    assert_eq!(state.play(0), Ok(Outcome::InProgress));
    assert_eq!(state.turn(), Mark::X);
    assert_eq!(state.board().count(Mark::X), 1);
    assert_eq!(state.board().count(Mark::O), 1);
}

#[test]
fn test_game_state_rejects_occupied_without_change() {
    let mut state = GameState::new();
    state.play(4).unwrap();
    let before = state;

    assert_eq!(
        state.play(4),
        Err(Error::InvalidMove(InvalidMove::Occupied { index: 4 }))
    );
    assert_eq!(state, before);
}

#[test]
fn test_game_state_terminal_rejects_moves() {
    let mut state = GameState::new();
    for index in [0, 3, 1, 4] {
        state.play(index).unwrap();
    }
    assert_eq!(state.play(2), Ok(Outcome::Win(Mark::X)));
    assert_eq!(state.play(8), Err(Error::GameOver));
}

#[test]
fn test_game_state_from_board() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    let state = GameState::from_board(board).unwrap();
    assert_eq!(state.turn(), Mark::X);

    let bad: Board = "XXX ... ...".parse().unwrap();
    assert_eq!(
        GameState::from_board(bad),
        Err(Error::InvalidPieceCounts { x_count: 3, o_count: 0 })
    );
}

#[test]
fn test_game_state_reset() {
    let mut state = GameState::new();
    state.play(0).unwrap();
    state.reset();
    assert_eq!(state, GameState::new());
}

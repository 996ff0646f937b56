//! Property tests for win detection over arbitrary boards.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use timeline_tictactoe::{Board, Player, Square, WinLine, evaluate};

fn any_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(any_square()).prop_map(Board::from_squares)
}

proptest! {
    #[test]
    fn completed_line_is_always_reported(board in any_board(), line in 0usize..8, player in prop_oneof![Just(Player::X), Just(Player::O)]) {
        let line = WinLine::ALL[line];
        let board = line
            .positions()
            .into_iter()
            .fold(board, |b, pos| b.with(pos, Square::Occupied(player)));

        let win = evaluate(&board).expect("a completed line must be found");
        // The reported line is the first completed one by priority.
        let first = WinLine::iter().find(|l| l.owner(&board).is_some()).unwrap();
        prop_assert_eq!(win.line, first);
        prop_assert!(WinLine::ALL.iter().position(|l| *l == win.line) <= WinLine::ALL.iter().position(|l| *l == line));
        prop_assert_eq!(Some(win.player), win.line.owner(&board));
    }

    #[test]
    fn no_completed_line_means_none(board in any_board()) {
        let any = WinLine::iter().any(|l| l.owner(&board).is_some());
        prop_assert_eq!(evaluate(&board).is_some(), any);
    }
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(evaluate(&Board::new()), None);
}

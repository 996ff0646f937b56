//! Tests for the render input built from a game.

use timeline_tictactoe::{Game, GameStatus, MoveDescriptor, Player, Position, WinLine};

#[test]
fn test_in_progress_view() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();

    let view = game.view().unwrap();
    assert_eq!(*view.cursor(), 1);
    assert_eq!(*view.to_move(), Player::O);
    assert_eq!(*view.status(), GameStatus::InProgress);
    assert_eq!(view.status_text(), "Next Player: O");
    assert_eq!(*view.win_line(), None);

    let labels: Vec<&str> = view.moves().iter().map(|e| e.label().as_str()).collect();
    assert_eq!(labels, vec!["Go to game start", "You are at move # 1 X = (1, 1)"]);
}

#[test]
fn test_won_view_highlights_line() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.play_index(index).unwrap();
    }

    let view = game.view().unwrap();
    assert_eq!(*view.status(), GameStatus::Won(Player::X));
    assert_eq!(view.status_text(), "Winner: X");
    assert_eq!(*view.win_line(), Some(WinLine::TopRow));
    assert_eq!(
        view.highlighted(),
        &vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_highlight_follows_cursor() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.play_index(index).unwrap();
    }
    game.jump(4).unwrap();

    let view = game.view().unwrap();
    assert!(view.highlighted().is_empty());
    assert_eq!(view.status_text(), "Next Player: X");
    assert_eq!(view.moves().len(), 6);

    let current: Vec<usize> = view
        .moves()
        .iter()
        .filter(|e| *e.is_current())
        .map(|e| *e.index())
        .collect();
    assert_eq!(current, vec![4]);
    assert_eq!(view.moves()[5].label(), "Go to move # 5 X = (0, 2)");
    assert_eq!(view.moves()[4].label(), "You are at move # 4 O = (1, 1)");
}

#[test]
fn test_draw_view() {
    let mut game = Game::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.play_index(index).unwrap();
    }

    let view = game.view().unwrap();
    assert_eq!(*view.status(), GameStatus::Draw);
    assert_eq!(view.status_text(), "Draw");
    assert!(view.highlighted().is_empty());
}

#[test]
fn test_game_start_entry() {
    let game = Game::new();
    let view = game.view().unwrap();
    let entry = &view.moves()[0];
    assert_eq!(*entry.descriptor(), MoveDescriptor::GameStart);
    assert!(*entry.is_current());
    assert_eq!(entry.label(), "Go to game start");
}

#[test]
fn test_schema_names_fields() {
    let schema = serde_json::to_string(&timeline_tictactoe::GameView::json_schema()).unwrap();
    assert!(schema.contains("status_text"));
    assert!(schema.contains("highlighted"));
}

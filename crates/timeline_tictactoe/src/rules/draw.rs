//! Draw detection and status derivation for tic-tac-toe.

use super::super::{Board, GameStatus, Square};
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    status(board) == GameStatus::Draw
}

/// Derives the status of a single snapshot.
///
/// The winner check runs before the fullness check, so a line completed with
/// the ninth mark is a win.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = evaluate(board) {
        GameStatus::Won(win.player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

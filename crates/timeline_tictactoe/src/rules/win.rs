//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that wins the game.
///
/// Variant order is evaluation priority: rows top to bottom, columns left to
/// right, then the two diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum WinLine {
    /// Positions 0, 1, 2.
    TopRow,
    /// Positions 3, 4, 5.
    MiddleRow,
    /// Positions 6, 7, 8.
    BottomRow,
    /// Positions 0, 3, 6.
    LeftColumn,
    /// Positions 1, 4, 7.
    CenterColumn,
    /// Positions 2, 5, 8.
    RightColumn,
    /// Positions 0, 4, 8.
    Diagonal,
    /// Positions 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in priority order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::Diagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions forming this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::Diagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of the three positions.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns the player holding all three squares of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The first completed line in priority order.
    pub line: WinLine,
}

/// Finds the first completed line on the board.
///
/// Lines are checked in [`WinLine::ALL`] order. The board is not assumed to
/// come from legal play: when several lines are complete, the first one by
/// priority is reported. `None` means either "in progress" or "draw"; use
/// [`super::status`] to tell them apart.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    WinLine::ALL
        .iter()
        .find_map(|line| line.owner(board).map(|player| Win { player, line: *line }))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player)
}

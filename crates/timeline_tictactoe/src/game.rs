//! Owner of the single (history, cursor) pair.

use super::action::MoveError;
use super::history::History;
use super::rules::{self, Win};
use super::view::GameView;
use super::{Board, GameStatus, Player, Position};
use tracing::instrument;

/// A tic-tac-toe game with time travel.
///
/// Wraps the pure [`History`] operations for callers that want to hold one
/// mutable game. Failed operations leave the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    cursor: usize,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current board.
    pub fn current(&self) -> &Board {
        &self.history.snapshots()[self.cursor]
    }

    /// Returns the player to move at the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.cursor)
    }

    /// Returns the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current())
    }

    /// Returns the winning line on the current snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::evaluate(self.current())
    }

    /// Places the current player's mark at `position`.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        let (history, cursor) = self.history.apply_move(self.cursor, position)?;
        self.history = history;
        self.cursor = cursor;
        Ok(())
    }

    /// Places the current player's mark at a raw board index (0-8).
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play_index(&mut self, index: usize) -> Result<(), MoveError> {
        let (history, cursor) = self.history.apply_index(self.cursor, index)?;
        self.history = history;
        self.cursor = cursor;
        Ok(())
    }

    /// Makes snapshot `target` current.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump(&mut self, target: usize) -> Result<(), MoveError> {
        self.cursor = self.history.jump_to(target)?;
        Ok(())
    }

    /// Builds the render input for the current snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn view(&self) -> Result<GameView, MoveError> {
        GameView::build(&self.history, self.cursor)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

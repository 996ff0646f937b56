//! Render input for presentation layers.
//!
//! A [`GameView`] is rebuilt from the history on every call. The winning
//! line is derived from the current board each time rather than stored, so
//! highlighting can never disagree with the snapshot being shown.

use super::action::MoveError;
use super::history::{History, MoveDescriptor};
use super::rules::{self, WinLine};
use super::{Board, GameStatus, Player, Position};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Getters)]
pub struct HistoryEntry {
    /// History index this entry jumps to.
    index: usize,
    /// What happened at this index.
    descriptor: MoveDescriptor,
    /// Button or caption text.
    label: String,
    /// Whether this is the current snapshot.
    is_current: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Getters)]
pub struct GameView {
    /// The current snapshot.
    board: Board,
    /// Index of the current snapshot.
    cursor: usize,
    /// Player whose turn it is at the cursor.
    to_move: Player,
    /// Status of the current snapshot.
    status: GameStatus,
    /// "Next Player: X", "Winner: X" or "Draw".
    status_text: String,
    /// First completed line on the current board.
    win_line: Option<WinLine>,
    /// Squares to highlight (the winning line, or none).
    highlighted: Vec<Position>,
    /// One entry per recorded snapshot.
    moves: Vec<HistoryEntry>,
}

impl GameView {
    /// Builds the view of `history` at `cursor`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `cursor` is not a recorded index.
    /// - `CorruptHistory` if any snapshot cannot be described.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn build(history: &History, cursor: usize) -> Result<Self, MoveError> {
        let board = *history.snapshot(cursor).ok_or(MoveError::OutOfRange {
            index: cursor,
            len: history.len(),
        })?;
        let to_move = Player::to_move_at(cursor);
        let status = rules::status(&board);
        let win_line = rules::evaluate(&board).map(|win| win.line);
        let highlighted = win_line
            .map(|line| line.positions().to_vec())
            .unwrap_or_default();

        let moves = history
            .describe_all()?
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let is_current = index == cursor;
                HistoryEntry {
                    index,
                    descriptor,
                    label: descriptor.label(is_current),
                    is_current,
                }
            })
            .collect();

        Ok(Self {
            board,
            cursor,
            to_move,
            status,
            status_text: status_text(status, to_move),
            win_line,
            highlighted,
            moves,
        })
    }

    /// Serializes the view as pretty-printed JSON.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// JSON schema describing [`GameView`].
    #[instrument]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(GameView)
    }
}

fn status_text(status: GameStatus, to_move: Player) -> String {
    match status {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next Player: {}", to_move),
    }
}

//! Move history with time-travel navigation.
//!
//! A [`History`] is an ordered list of board snapshots. Snapshot 0 is the
//! empty board and every later snapshot adds one mark. The cursor selecting
//! the "current" snapshot is kept outside the history and passed in, so the
//! same history can be viewed from any point.
//!
//! Histories are values: [`History::apply_move`] builds a new history and
//! leaves the receiver untouched. Moving from an earlier snapshot discards
//! every snapshot after it, so there is always a single linear timeline.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

/// Ordered sequence of board snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
}

/// What happened at one history index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MoveDescriptor {
    /// Index 0: the empty board before any move.
    GameStart,
    /// A mark placed by a move.
    Placed {
        /// Move number, equal to the history index.
        number: usize,
        /// The mark and where it went.
        mv: Move,
    },
}

impl MoveDescriptor {
    /// The placed move, if this is not the game start.
    pub fn mv(&self) -> Option<Move> {
        match self {
            MoveDescriptor::GameStart => None,
            MoveDescriptor::Placed { mv, .. } => Some(*mv),
        }
    }

    /// Human-readable label for a history list entry.
    ///
    /// The current entry reads "You are at move # ..." instead of
    /// "Go to move # ...". The game start label never changes.
    pub fn label(&self, is_current: bool) -> String {
        match self {
            MoveDescriptor::GameStart => "Go to game start".to_string(),
            MoveDescriptor::Placed { number, mv } => {
                let prefix = if is_current { "You are at" } else { "Go to" };
                format!(
                    "{} move # {} {} = ({}, {})",
                    prefix,
                    number,
                    mv.player,
                    mv.position.row(),
                    mv.position.col()
                )
            }
        }
    }
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Builds a history from existing snapshots without checking them.
    ///
    /// Only emptiness is rejected. Broken transitions surface later through
    /// [`History::describe_move`] and [`History::validate`].
    #[instrument(skip(snapshots), fields(len = snapshots.len()))]
    pub fn from_snapshots(snapshots: Vec<Board>) -> Result<Self, MoveError> {
        if snapshots.is_empty() {
            return Err(MoveError::EmptyHistory);
        }
        Ok(Self { snapshots })
    }

    /// Number of snapshots (always at least 1).
    #[instrument(skip(self))]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The snapshot at `index`, if recorded.
    #[instrument(skip(self))]
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Board {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Status of the snapshot at `index`.
    pub fn status_at(&self, index: usize) -> Result<GameStatus, MoveError> {
        self.board_at(index).map(rules::status)
    }

    fn board_at(&self, index: usize) -> Result<&Board, MoveError> {
        self.snapshots.get(index).ok_or(MoveError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Places the next mark on the snapshot at `cursor`.
    ///
    /// The mark is chosen by turn parity on `cursor`. Snapshots after
    /// `cursor` are dropped from the returned history and the new board is
    /// appended; the returned cursor points at it. `self` is not modified.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `cursor` is not a recorded index.
    /// - `GameOver` if the current snapshot already has a winner.
    /// - `OccupiedCell` if the square is taken.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn apply_move(
        &self,
        cursor: usize,
        position: Position,
    ) -> Result<(History, usize), MoveError> {
        let current = self.board_at(cursor)?;
        let action = Move::new(Player::to_move_at(cursor), position);

        if let Err(e) = MoveContract::pre(current, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let next = current.with(position, Square::Occupied(action.player));

        #[cfg(debug_assertions)]
        MoveContract::post(current, &next)?;

        let mut snapshots = Vec::with_capacity(cursor + 2);
        snapshots.extend_from_slice(&self.snapshots[..=cursor]);
        snapshots.push(next);
        let history = History { snapshots };
        let new_cursor = cursor + 1;

        debug!(
            mv = %action,
            discarded = self.len() - cursor - 1,
            new_cursor,
            "Move applied"
        );

        Ok((history, new_cursor))
    }

    /// Like [`History::apply_move`], but takes a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn apply_index(&self, cursor: usize, index: usize) -> Result<(History, usize), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidCell { index })?;
        self.apply_move(cursor, position)
    }

    /// Validates a jump target and returns it as the new cursor.
    ///
    /// The history itself is never changed by a jump.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn jump_to(&self, target: usize) -> Result<usize, MoveError> {
        if target < self.len() {
            debug!(target, "Jump accepted");
            Ok(target)
        } else {
            warn!(target, "Jump rejected");
            Err(MoveError::OutOfRange {
                index: target,
                len: self.len(),
            })
        }
    }

    /// Describes the move that produced snapshot `index`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is not recorded.
    /// - `CorruptHistory` if the snapshot does not differ from its
    ///   predecessor by exactly one newly placed mark.
    #[instrument(skip(self))]
    pub fn describe_move(&self, index: usize) -> Result<MoveDescriptor, MoveError> {
        let after = self.board_at(index)?;
        if index == 0 {
            return Ok(MoveDescriptor::GameStart);
        }
        let before = &self.snapshots[index - 1];

        let changed = after.changed_since(before);
        if let [position] = changed.as_slice()
            && before.is_empty(*position)
            && let Square::Occupied(player) = after.get(*position)
        {
            return Ok(MoveDescriptor::Placed {
                number: index,
                mv: Move::new(player, *position),
            });
        }

        error!(index, changed = changed.len(), "Corrupt history");
        Err(MoveError::CorruptHistory {
            index,
            changed: changed.len(),
        })
    }

    /// Describes every snapshot in order.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn describe_all(&self) -> Result<Vec<MoveDescriptor>, MoveError> {
        (0..self.len()).map(|i| self.describe_move(i)).collect()
    }

    /// Checks all history invariants.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(self)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

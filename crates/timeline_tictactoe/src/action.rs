//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move placed into the history
//! can be recovered later by diffing consecutive snapshots.

use super::{Player, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when moving or navigating through history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", position)]
    OccupiedCell {
        /// Requested position.
        position: Position,
    },

    /// The current snapshot already has a winner.
    #[display("Game is already over: {} won", winner)]
    GameOver {
        /// Winner of the current snapshot.
        winner: Player,
    },

    /// History index outside `[0, len - 1]`.
    #[display("History index {} out of range (history has {} snapshots)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Consecutive snapshots do not differ by exactly one placed mark.
    #[display("Corrupt history at snapshot {}: {} squares changed", index, changed)]
    CorruptHistory {
        /// Index of the later snapshot in the broken pair.
        index: usize,
        /// Number of squares that differ.
        changed: usize,
    },

    /// Raw cell index outside 0-8.
    #[display("Cell index {} out of bounds (must be 0-8)", index)]
    InvalidCell {
        /// Requested index.
        index: usize,
    },

    /// A history must contain at least the starting snapshot.
    #[display("History must contain at least one snapshot")]
    EmptyHistory,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

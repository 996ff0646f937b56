//! The first snapshot is the empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: snapshot 0 is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshot(0)
            .is_some_and(|board| *board == Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

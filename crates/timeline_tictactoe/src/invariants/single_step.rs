//! Each snapshot adds exactly one mark to the previous one.

use super::super::{Board, History, Square};
use super::Invariant;

/// Returns true when `after` is `before` plus exactly one newly occupied square.
pub(crate) fn is_single_placement(before: &Board, after: &Board) -> bool {
    match after.changed_since(before).as_slice() {
        [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
        _ => false,
    }
}

/// Invariant: consecutive snapshots differ by one Empty to Occupied square.
///
/// Marks are never erased or overwritten, and no snapshot repeats or skips
/// a move.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| is_single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty square"
    }
}

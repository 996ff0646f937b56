//! Alternating turn invariant: marks follow history parity.

use super::super::{History, Player};
use super::Invariant;

/// Invariant: the mark added at snapshot `i` belongs to `Player::to_move_at(i - 1)`.
///
/// X places odd-numbered moves, O places even-numbered ones.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Player::to_move_at(i);
                pair[1]
                    .changed_since(&pair[0])
                    .iter()
                    .all(|pos| pair[1].get(*pos).player() == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Square};

    #[test]
    fn test_played_history_holds() {
        let (history, cursor) = History::new().apply_move(0, Position::Center).unwrap();
        let (history, cursor) = history.apply_move(cursor, Position::TopLeft).unwrap();
        let (history, _) = history.apply_move(cursor, Position::BottomRight).unwrap();
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let o = Board::new().with(Position::Center, Square::Occupied(Player::O));
        let history = History::from_snapshots(vec![Board::new(), o]).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let second = first.with(Position::TopLeft, Square::Occupied(Player::X));
        let history = History::from_snapshots(vec![Board::new(), first, second]).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}

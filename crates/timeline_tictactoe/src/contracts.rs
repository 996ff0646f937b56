//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::single_step::is_single_placement;
use super::rules::evaluate;
use super::Board;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the board must not already have a winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` if any line is complete.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match evaluate(board) {
            Some(win) => Err(MoveError::GameOver { winner: win.player }),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `OccupiedCell` if the target square is taken.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::OccupiedCell {
                position: mov.position,
            })
        }
    }
}

/// Composite precondition for a move.
///
/// The winner check runs first: clicking the square that just won reports
/// `GameOver`, not `OccupiedCell`.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameNotOver::check(board)?;
        SquareIsEmpty::check(mov, board)?;
        Ok(())
    }
}

/// Contract for placing a mark on a snapshot.
///
/// Preconditions:
/// - No winner yet
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one previously empty square is now occupied
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        if is_single_placement(before, after) {
            Ok(())
        } else {
            let changed = after.changed_since(before).len();
            warn!(changed, "Move postcondition violated");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected one new mark, found {} changed squares",
                changed
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&Board::new(), &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::OccupiedCell {
                position: Position::Center
            })
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, pos| b.with(pos, Square::Occupied(Player::X)));
        let action = Move::new(Player::O, Position::TopRight);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::GameOver { winner: Player::X })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new();
        let after = before.with(Position::Center, Square::Occupied(Player::X));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new();
        let after = before
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}

//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a single board snapshot
//! - **History**: persistent list of snapshots with append-after-cursor and jump
//! - **Game**: owner of one (history, cursor) pair
//! - **View**: render input for front ends, rebuilt on demand
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//! game.jump(1)?;
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), timeline_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use game::Game;
pub use history::{History, MoveDescriptor};
pub use position::Position;
pub use rules::{Win, WinLine, evaluate};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, HistoryEntry};

//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules never look at history, so any
//! snapshot can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, status};
pub use win::{Win, WinLine, check_winner, evaluate};

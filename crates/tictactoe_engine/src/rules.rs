//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the board, the controller and the computer player all share
//! one definition of a win.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

//! Pure tic-tac-toe game logic.
//!
//! - [`Board`] holds the 3x3 grid, validates and applies moves, and derives
//!   the [`GameState`].
//! - [`GameController`] runs the turn order for a [`Mode`], accepting human
//!   moves and playing the computer's.
//! - [`computer::best_move`] is the computer's move policy.
//!
//! ```
//! use tictactoe_engine::{GameController, GameState, Mark, Mode};
//!
//! let mut game = GameController::default();
//! game.start(Mode::Multiplayer);
//! for index in [0, 3, 1, 4, 2] {
//!     game.submit_move(index)?;
//! }
//! assert_eq!(game.state(), GameState::Won(Mark::X));
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod computer;
mod controller;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use board::Board;
pub use controller::{GameController, Mode, Phase, Player, Snapshot};
pub use position::Position;
pub use types::{Cell, GameState, Mark};

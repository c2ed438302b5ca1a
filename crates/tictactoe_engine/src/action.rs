//! Moves and the errors raised when they are rejected.

use super::{Mark, Position};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Rejections are caused by user input and are never fatal; the board and
/// controller are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Position {_0} is off the board (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the one to move.
    #[display("It's not {_0}'s turn")]
    WrongTurn(#[error(not(source))] Mark),

    /// No game has been started.
    #[display("No game in progress")]
    NoGame,

    /// A human tried to move on the computer's turn.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,

    /// The computer was asked to move on a human's turn.
    #[display("Waiting for a human move")]
    AwaitingHuman,
}

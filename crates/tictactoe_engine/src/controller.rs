//! Turn orchestration between two players.
//!
//! The controller owns the single [`Board`] of the current game and is the
//! only thing that mutates it. Human input arrives through
//! [`GameController::submit_move`]; computer turns are played by
//! [`GameController::computer_move`], which goes through the same validated
//! path.

use crate::computer;
use crate::{Board, GameState, InvalidMove, Mark, Move, Position};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// Which kind of game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum Mode {
    /// Two humans sharing the keyboard.
    #[display("Multiplayer")]
    Multiplayer,
    /// One human against the computer.
    #[display("Single player")]
    SinglePlayer,
}

/// Who controls a mark in the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Human playing X.
    HumanX,
    /// Human playing O.
    HumanO,
    /// Computer playing X.
    ComputerX,
    /// Computer playing O.
    ComputerO,
}

impl Player {
    /// Builds the player for a mark.
    pub fn new(mark: Mark, computer: bool) -> Self {
        match (mark, computer) {
            (Mark::X, false) => Player::HumanX,
            (Mark::O, false) => Player::HumanO,
            (Mark::X, true) => Player::ComputerX,
            (Mark::O, true) => Player::ComputerO,
        }
    }

    /// The mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::HumanX | Player::ComputerX => Mark::X,
            Player::HumanO | Player::ComputerO => Mark::O,
        }
    }

    /// Returns true if the computer policy picks this player's moves.
    pub fn is_computer(self) -> bool {
        matches!(self, Player::ComputerX | Player::ComputerO)
    }
}

/// Lifecycle of the controller: `Idle -> InProgress -> Terminal -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game started (or the last one was reset).
    Idle,
    /// Waiting for the current player's move.
    InProgress,
    /// The game was won or drawn.
    Terminal(GameState),
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// Lifecycle phase.
    phase: Phase,
    /// Selected mode, `None` when idle.
    mode: Option<Mode>,
    /// Board contents.
    board: Board,
    /// State derived from the board.
    state: GameState,
    /// Player to move, `None` when idle or terminal.
    current_player: Option<Player>,
    /// Most recent move of the current game.
    last_move: Option<Move>,
}

/// Drives a game from start to a terminal state.
#[derive(Debug, Clone)]
pub struct GameController {
    computer_mark: Mark,
    mode: Option<Mode>,
    board: Board,
    history: Vec<Move>,
}

impl GameController {
    /// Creates an idle controller. In single-player games the computer plays `computer_mark`.
    #[instrument]
    pub fn new(computer_mark: Mark) -> Self {
        Self {
            computer_mark,
            mode: None,
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Mark the computer plays in single-player games.
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// Starts a new game. X always moves first.
    ///
    /// Any game in progress is discarded.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        info!(%mode, computer = ?self.computer_mark, "Starting game");
        self.mode = Some(mode);
        self.board = Board::new();
        self.history.clear();
    }

    /// Discards the current game and returns to idle.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting controller");
        self.mode = None;
        self.board = Board::new();
        self.history.clear();
    }

    /// The selected mode, if a game was started.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// The board of the current game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played in the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Game state derived from the board.
    pub fn state(&self) -> GameState {
        self.board.state()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (self.mode, self.board.state()) {
            (None, _) => Phase::Idle,
            (Some(_), GameState::InProgress) => Phase::InProgress,
            (Some(_), state) => Phase::Terminal(state),
        }
    }

    /// Player to move, or `None` when idle or terminal.
    pub fn current_player(&self) -> Option<Player> {
        if self.phase() != Phase::InProgress {
            return None;
        }
        self.player_for(self.board.to_move())
    }

    /// Who controls `mark` in the current mode.
    pub fn player_for(&self, mark: Mark) -> Option<Player> {
        match self.mode? {
            Mode::Multiplayer => Some(Player::new(mark, false)),
            Mode::SinglePlayer => Some(Player::new(mark, mark == self.computer_mark)),
        }
    }

    /// Returns true when the computer should be asked for a move.
    pub fn is_computer_turn(&self) -> bool {
        self.current_player().is_some_and(Player::is_computer)
    }

    /// Plays a human move at `index` (0-8).
    ///
    /// On success the turn passes to the opponent unless the move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] for an index off the board, an occupied cell,
    /// a finished game, no game at all, or when it is the computer's turn.
    /// The game is left unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<GameState, InvalidMove> {
        let player = self.expect_turn()?;
        if player.is_computer() {
            warn!("Human move submitted on the computer's turn");
            return Err(InvalidMove::AwaitingComputer);
        }
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move off the board");
            InvalidMove::OutOfRange(index)
        })?;
        self.play(Move::new(player.mark(), position))
    }

    /// Lets the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::AwaitingHuman`] if a human is to move, or the
    /// same errors as [`GameController::submit_move`] when no game is in progress.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<GameState, InvalidMove> {
        let player = self.expect_turn()?;
        if !player.is_computer() {
            return Err(InvalidMove::AwaitingHuman);
        }
        let position = computer::best_move(&self.board, player.mark()).ok_or(InvalidMove::GameOver)?;
        self.play(Move::new(player.mark(), position))
    }

    /// Read-only snapshot for rendering.
    pub fn current_state(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            mode: self.mode,
            board: self.board,
            state: self.board.state(),
            current_player: self.current_player(),
            last_move: self.last_move(),
        }
    }

    fn expect_turn(&self) -> Result<Player, InvalidMove> {
        match self.phase() {
            Phase::Idle => Err(InvalidMove::NoGame),
            Phase::Terminal(_) => Err(InvalidMove::GameOver),
            Phase::InProgress => self.current_player().ok_or(InvalidMove::NoGame),
        }
    }

    fn play(&mut self, mv: Move) -> Result<GameState, InvalidMove> {
        self.board = self.board.apply(mv).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.history.push(mv);

        let state = self.board.state();
        match state {
            GameState::InProgress => debug!(%mv, next = %self.board.to_move(), "Turn passed"),
            _ => info!(%mv, %state, "Game finished"),
        }
        Ok(state)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}

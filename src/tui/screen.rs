//! Screen trait and transition type for the UI state machine.

use crate::Config;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use tictactoe_engine::{GameController, Mode};

/// The result of handling an event on a screen.
///
/// Screens return this to drive the [`App`](super::App) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Abandon any game and show the menu.
    GoToMenu,
    /// Start a fresh game in the given mode.
    GoToGame {
        /// Mode of the new game.
        mode: Mode,
    },
    /// Exit the application.
    Quit,
}

/// Implemented by each screen of the UI.
///
/// Screens own only presentation state (selection, cursor, messages). The
/// game itself is reached through the [`GameController`] handed to each call.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, controller: &GameController, config: &Config);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent, controller: &mut GameController) -> ScreenTransition;

    /// Handles a mouse event. `area` is the frame area of the last render.
    fn handle_mouse(
        &mut self,
        _mouse: MouseEvent,
        _area: Rect,
        _controller: &mut GameController,
    ) -> ScreenTransition {
        ScreenTransition::Stay
    }

    /// Called once per loop iteration, whether or not an event arrived.
    fn tick(&mut self, _controller: &mut GameController) -> ScreenTransition {
        ScreenTransition::Stay
    }
}

//! Event loop driving the screen state machine.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::Duration;
use tictactoe_engine::{GameController, Mode};
use tracing::{debug, info, instrument};

use super::screen::{Screen, ScreenTransition};
use super::screens::{InGameScreen, MainMenuScreen};
use crate::Config;

/// How long to wait for input before the next tick.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Active screen in the UI state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    InGame(InGameScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }
}

/// Owns the active screen and borrows the game for the lifetime of the UI.
///
/// The controller is created by the caller and passed in, so the UI never
/// holds a game of its own.
pub struct App<'a> {
    controller: &'a mut GameController,
    config: &'a Config,
    screen: ActiveScreen,
}

impl<'a> App<'a> {
    /// Creates the app on the main menu.
    pub fn new(controller: &'a mut GameController, config: &'a Config) -> Self {
        Self {
            controller,
            config,
            screen: ActiveScreen::MainMenu(MainMenuScreen::new()),
        }
    }

    /// Returns true while the game screen is showing.
    pub fn in_game(&self) -> bool {
        matches!(self.screen, ActiveScreen::InGame(_))
    }

    /// Runs the event loop until the player exits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>, mode: Option<Mode>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting UI event loop");

        if let Some(mode) = mode {
            self.apply(ScreenTransition::GoToGame { mode });
        }

        loop {
            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                self.screen.screen().render(f, &*self.controller, self.config);
            })?;

            let mut transition = self.screen.screen_mut().tick(self.controller);

            if transition == ScreenTransition::Stay && event::poll(POLL_INTERVAL)? {
                transition = match event::read()? {
                    // crossterm fires both press and release on some platforms.
                    Event::Key(key) if key.kind == KeyEventKind::Release => ScreenTransition::Stay,
                    Event::Key(key)
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        ScreenTransition::Quit
                    }
                    Event::Key(key) => self.screen.screen_mut().handle_key(key, self.controller),
                    Event::Mouse(mouse) => {
                        self.screen
                            .screen_mut()
                            .handle_mouse(mouse, area, self.controller)
                    }
                    _ => ScreenTransition::Stay,
                };
            }

            if !self.apply(transition) {
                info!("Exiting");
                return Ok(());
            }
        }
    }

    /// Applies a transition. Returns false when the app should exit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToMenu => {
                debug!("Returning to menu");
                self.controller.reset();
                self.screen = ActiveScreen::MainMenu(MainMenuScreen::new());
            }
            ScreenTransition::GoToGame { mode } => {
                self.controller.start(mode);
                self.screen = ActiveScreen::InGame(InGameScreen::new(self.config.computer_delay()));
            }
            ScreenTransition::Quit => return false,
        }
        true
    }
}

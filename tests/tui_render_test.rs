//! Render smoke tests against an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend};
use std::time::Duration;
use tictactoe::tui::{InGameScreen, MainMenuScreen, Screen};
use tictactoe::{Config, GameController, Mode};

fn render(screen: &dyn Screen, controller: &GameController, config: &Config) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| screen.render(f, controller, config))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_menu_lists_modes_and_exit() {
    let text = render(&MainMenuScreen::new(), &GameController::default(), &Config::default());
    assert!(text.contains("Multiplayer"));
    assert!(text.contains("Single player (you play X)"));
    assert!(text.contains("Exit"));
}

#[test]
fn test_game_shows_turn_and_winner() {
    let config = Config::default();
    let screen = InGameScreen::new(Duration::ZERO);
    let mut controller = GameController::default();
    controller.start(Mode::Multiplayer);

    let text = render(&screen, &controller, &config);
    assert!(text.contains("Player One's turn (X)"));

    for index in [0, 3, 1, 4, 2] {
        controller.submit_move(index).unwrap();
    }
    let text = render(&screen, &controller, &config);
    assert!(text.contains("Player One won!"));
}

#[test]
fn test_game_shows_draw() {
    let config = Config::default();
    let screen = InGameScreen::new(Duration::ZERO);
    let mut controller = GameController::default();
    controller.start(Mode::Multiplayer);
    for index in [0, 1, 2, 4, 3, 6, 7, 5, 8] {
        controller.submit_move(index).unwrap();
    }
    assert!(render(&screen, &controller, &config).contains("It's a draw!"));
}

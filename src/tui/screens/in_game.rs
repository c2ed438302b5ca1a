//! Game screen: the board, whose turn it is, and the outcome.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tictactoe_engine::{GameController, Mode, Phase, Position};
use tracing::{debug, instrument, warn};

use crate::Config;
use crate::tui::input::{cell_at, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{GameLayout, cell_rects, render_board};

/// State for the game screen.
#[derive(Debug)]
pub struct InGameScreen {
    cursor: Position,
    /// Last rejected move, shown until the next successful one.
    error: Option<String>,
    computer_delay: Duration,
    computer_waiting_since: Option<Instant>,
}

impl InGameScreen {
    /// Creates the screen. The computer waits `computer_delay` before each move.
    pub fn new(computer_delay: Duration) -> Self {
        Self {
            cursor: Position::Center,
            error: None,
            computer_delay,
            computer_waiting_since: None,
        }
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message of the last rejected move.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[instrument(skip(self, controller))]
    fn submit(&mut self, controller: &mut GameController, position: Position) {
        match controller.submit_move(position.to_index()) {
            Ok(state) => {
                debug!(%state, "Move accepted");
                self.cursor = position;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.error = Some(e.to_string());
            }
        }
    }

    fn restart(controller: &GameController) -> ScreenTransition {
        match controller.mode() {
            Some(mode) => ScreenTransition::GoToGame { mode },
            None => ScreenTransition::GoToMenu,
        }
    }

    fn status_lines(&self, controller: &GameController, config: &Config) -> Vec<Line<'static>> {
        let headline = match controller.phase() {
            Phase::Idle => "No game in progress".to_string(),
            Phase::InProgress => match controller.current_player() {
                Some(player) if player.is_computer() => {
                    format!("{} (computer) is thinking...", config.name_for(player.mark()))
                }
                Some(player) => {
                    format!("{}'s turn ({})", config.name_for(player.mark()), player.mark())
                }
                None => String::new(),
            },
            Phase::Terminal(state) => match state.winner() {
                Some(mark) => format!("{} won! Press 'r' to play again.", config.name_for(mark)),
                None => "It's a draw! Press 'r' to play again.".to_string(),
            },
        };

        let mut lines = vec![Line::styled(
            headline,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        if let Some(error) = &self.error {
            lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        } else if let Some(mv) = controller.last_move() {
            lines.push(Line::styled(
                format!("Last move: {}", mv),
                Style::default().fg(Color::Gray),
            ));
        }
        lines
    }
}

impl Screen for InGameScreen {
    fn render(&self, frame: &mut Frame, controller: &GameController, config: &Config) {
        let layout = GameLayout::new(frame.area());
        let snapshot = controller.current_state();

        let title = match snapshot.mode() {
            Some(Mode::SinglePlayer) => "Tic Tac Toe - Single player",
            _ => "Tic Tac Toe - Multiplayer",
        };
        let title = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        let cursor = (snapshot.phase() == &Phase::InProgress).then_some(self.cursor);
        render_board(
            frame,
            layout.board,
            snapshot.board(),
            cursor,
            snapshot.board().winning_line(),
        );

        let status = Paragraph::new(self.status_lines(controller, config))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout.status);

        let help = Paragraph::new(
            "1-9 / arrows+Enter / click: Move | r: Restart | m: Menu | q: Exit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, key, controller), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, controller: &mut GameController) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = Position::from_digit(c) {
                    self.submit(controller, position);
                }
                ScreenTransition::Stay
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(controller, self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Self::restart(controller),
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => ScreenTransition::GoToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        controller: &mut GameController,
    ) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        let cells = cell_rects(GameLayout::new(area).board);
        if let Some(position) = cell_at(&cells, mouse.column, mouse.row) {
            debug!(%position, "Cell clicked");
            self.submit(controller, position);
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, controller: &mut GameController) -> ScreenTransition {
        if !controller.is_computer_turn() {
            self.computer_waiting_since = None;
            return ScreenTransition::Stay;
        }

        let since = *self.computer_waiting_since.get_or_insert_with(Instant::now);
        if since.elapsed() >= self.computer_delay {
            self.computer_waiting_since = None;
            match controller.computer_move() {
                Ok(_) => self.error = None,
                Err(e) => {
                    warn!(error = %e, "Computer move failed");
                    self.error = Some(e.to_string());
                }
            }
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_engine::{Cell, InvalidMove, Mark};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn game(mode: Mode) -> (InGameScreen, GameController) {
        let mut controller = GameController::default();
        controller.start(mode);
        (InGameScreen::new(Duration::ZERO), controller)
    }

    #[test]
    fn test_digit_submits_move() {
        let (mut screen, mut controller) = game(Mode::Multiplayer);
        screen.handle_key(key(KeyCode::Char('5')), &mut controller);
        assert_eq!(controller.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(screen.cursor(), Position::Center);
    }

    #[test]
    fn test_rejected_move_is_reported_and_state_kept() {
        let (mut screen, mut controller) = game(Mode::Multiplayer);
        screen.handle_key(key(KeyCode::Char('1')), &mut controller);
        let board = *controller.board();
        screen.handle_key(key(KeyCode::Char('1')), &mut controller);
        assert_eq!(controller.board(), &board);
        assert_eq!(
            screen.error(),
            Some(InvalidMove::Occupied(Position::TopLeft).to_string().as_str())
        );

        screen.handle_key(key(KeyCode::Char('2')), &mut controller);
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn test_cursor_and_enter() {
        let (mut screen, mut controller) = game(Mode::Multiplayer);
        screen.handle_key(key(KeyCode::Up), &mut controller);
        screen.handle_key(key(KeyCode::Left), &mut controller);
        screen.handle_key(key(KeyCode::Enter), &mut controller);
        assert_eq!(controller.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_click_plays_cell() {
        let (mut screen, mut controller) = game(Mode::Multiplayer);
        let area = Rect::new(0, 0, 80, 30);
        let target = cell_rects(GameLayout::new(area).board)[Position::BottomRight.to_index()];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 1,
            row: target.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        screen.handle_mouse(click, area, &mut controller);
        assert_eq!(controller.board().get(Position::BottomRight), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_tick_plays_computer_turn() {
        let (mut screen, mut controller) = game(Mode::SinglePlayer);
        screen.tick(&mut controller);
        assert!(controller.history().is_empty());

        screen.handle_key(key(KeyCode::Char('1')), &mut controller);
        assert!(controller.is_computer_turn());
        screen.tick(&mut controller);
        assert_eq!(controller.history().len(), 2);
        assert!(!controller.is_computer_turn());
    }

    #[test]
    fn test_computer_move_clears_waiting_message() {
        let (mut screen, mut controller) = game(Mode::SinglePlayer);
        screen.handle_key(key(KeyCode::Char('1')), &mut controller);
        screen.handle_key(key(KeyCode::Char('9')), &mut controller);
        assert_eq!(
            screen.error(),
            Some(InvalidMove::AwaitingComputer.to_string().as_str())
        );
        assert_eq!(controller.history().len(), 1);

        screen.tick(&mut controller);
        assert!(!controller.is_computer_turn());
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn test_navigation_keys() {
        let (mut screen, mut controller) = game(Mode::SinglePlayer);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('r')), &mut controller),
            ScreenTransition::GoToGame {
                mode: Mode::SinglePlayer
            }
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &mut controller),
            ScreenTransition::GoToMenu
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q')), &mut controller),
            ScreenTransition::Quit
        );
    }
}

//! Main menu: pick a mode or exit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_engine::{GameController, Mode};
use tracing::{info, instrument};

use crate::Config;
use crate::tui::screen::{Screen, ScreenTransition};

/// Menu options: one per game mode, then exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(Mode),
    Exit,
}

impl MenuOption {
    fn all() -> Vec<MenuOption> {
        Mode::iter()
            .map(MenuOption::Play)
            .chain(std::iter::once(MenuOption::Exit))
            .collect()
    }

    fn label(self, config: &Config) -> String {
        match self {
            Self::Play(Mode::Multiplayer) => "Multiplayer".to_string(),
            Self::Play(Mode::SinglePlayer) => {
                let human = config.computer_mark().opponent();
                format!("Single player (you play {})", human)
            }
            Self::Exit => "Exit".to_string(),
        }
    }

    fn transition(self) -> ScreenTransition {
        match self {
            Self::Play(mode) => ScreenTransition::GoToGame { mode },
            Self::Exit => ScreenTransition::Quit,
        }
    }
}

/// State for the main menu.
#[derive(Debug)]
pub struct MainMenuScreen {
    list_state: ListState,
}

impl MainMenuScreen {
    /// Creates the menu with the first option selected.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::all()
            .get(idx)
            .copied()
            .unwrap_or(MenuOption::Exit)
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MainMenuScreen {
    fn render(&self, frame: &mut Frame, _controller: &GameController, config: &Config) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::all()
            .into_iter()
            .map(|opt| ListItem::new(opt.label(config)))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | 1/2: Quick start | q: Exit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _controller), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, _controller: &mut GameController) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(?option, "Menu option selected");
                option.transition()
            }
            KeyCode::Char('1') => MenuOption::Play(Mode::Multiplayer).transition(),
            KeyCode::Char('2') => MenuOption::Play(Mode::SinglePlayer).transition(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

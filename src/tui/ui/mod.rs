//! Stateless rendering helpers for the game screen.

mod board;

pub use board::{CELL_HEIGHT, CELL_WIDTH, cell_rects, render_board};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Title bar.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// Turn and outcome messages.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

impl GameLayout {
    /// Splits the frame area. Rendering and mouse hit-testing both use this.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3 * CELL_HEIGHT), // Board
                Constraint::Length(4), // Status
                Constraint::Length(3), // Help
            ])
            .split(area);
        Self {
            title: chunks[0],
            board: chunks[1],
            status: chunks[2],
            help: chunks[3],
        }
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

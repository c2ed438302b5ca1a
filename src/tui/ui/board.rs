//! Board widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Board, Cell, Mark, Position};

use super::center_rect;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Rectangles of the nine cells, in index order, for a board centered in `area`.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, 3 * CELL_WIDTH, 3 * CELL_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell_area;
        }
    }
    cells
}

/// Draws the board. `cursor` is highlighted, as is the winning line.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning_line: Option<[Position; 3]>,
) {
    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(area)) {
        let won = winning_line.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, board.get(pos), pos, cursor == Some(pos), won);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, pos: Position, cursor: bool, won: bool) {
    let (symbol, mut style) = match cell {
        // Empty cells show their keypad digit.
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if won {
        style = style.fg(Color::Green);
    }
    let border_style = if cursor {
        style = style.bg(Color::White).fg(Color::Black);
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

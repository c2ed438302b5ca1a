//! Keyboard cursor movement and mouse hit-testing.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_engine::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(2), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(2)),
        _ => (row, column),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Finds the cell under a terminal coordinate.
///
/// `cells` are the rectangles the board was drawn into, in index order.
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    cells
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_cell_at() {
        let cells: [Rect; 9] = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(10 + col * 5, 2 + row * 3, 5, 3)
        });
        assert_eq!(cell_at(&cells, 10, 2), Some(Position::TopLeft));
        assert_eq!(cell_at(&cells, 17, 6), Some(Position::Center));
        assert_eq!(cell_at(&cells, 24, 10), Some(Position::BottomRight));
        assert_eq!(cell_at(&cells, 9, 2), None);
        assert_eq!(cell_at(&cells, 25, 2), None);
        assert_eq!(cell_at(&cells, 12, 11), None);
    }
}

//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn parse(rows: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in rows.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[i] = match c {
                'X' => Cell::Occupied(Mark::X),
                'O' => Cell::Occupied(Mark::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&parse("X.. .O. ...")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = parse("XOX OXX OXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins the left column on the last move.
        let board = parse("XOX XOO XXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

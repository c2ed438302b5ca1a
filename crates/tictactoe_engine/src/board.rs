//! The 3x3 board.

use crate::rules;
use crate::{Cell, GameState, InvalidMove, Mark, Move, Position};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A board only changes through [`Board::apply`], which returns a new board,
/// so the number of occupied cells always equals the number of moves played
/// and the X count is never behind the O count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// The mark to play next. X starts, so X is to move whenever the counts are level.
    pub fn to_move(&self) -> Mark {
        if self.move_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Positions that are still empty, in index order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// The first completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self)
    }

    /// Derives the game state from the board contents.
    pub fn state(&self) -> GameState {
        if let Some(winner) = rules::check_winner(self) {
            GameState::Won(winner)
        } else if rules::is_draw(self) {
            GameState::Draw
        } else {
            GameState::InProgress
        }
    }

    /// Applies a move, returning the updated board.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameOver`] if the board is already won or drawn.
    /// - [`InvalidMove::WrongTurn`] if the move's mark is not [`Board::to_move`].
    /// - [`InvalidMove::Occupied`] if the target cell holds a mark.
    #[instrument(level = "trace", skip(self), fields(mv = %mv))]
    pub fn apply(&self, mv: Move) -> Result<Board, InvalidMove> {
        if self.state().is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if mv.mark != self.to_move() {
            return Err(InvalidMove::WrongTurn(mv.mark));
        }
        if !self.is_empty(mv.position) {
            return Err(InvalidMove::Occupied(mv.position));
        }

        let mut next = *self;
        next.cells[mv.position.to_index()] = Cell::Occupied(mv.mark);
        trace!(moves = next.move_count(), "Move applied");
        Ok(next)
    }

    /// Applies a move given by raw index (0-8).
    ///
    /// # Errors
    ///
    /// [`InvalidMove::OutOfRange`] for indices past 8, otherwise as [`Board::apply`].
    pub fn apply_index(&self, mark: Mark, index: usize) -> Result<Board, InvalidMove> {
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        self.apply(Move::new(mark, position))
    }
}

impl std::fmt::Display for Board {
    /// Renders ` X | O | X` rows separated by `-----------`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let [a, b, c] = [0, 1, 2].map(|col| self.cells[row * 3 + col].symbol());
            writeln!(f, " {a} | {b} | {c}")?;
            if row < 2 {
                writeln!(f, "{}", "-".repeat(11))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> Board {
        indices.iter().fold(Board::new(), |board, &i| {
            board
                .apply_index(board.to_move(), i)
                .expect("scripted move should be legal")
        })
    }

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.state(), GameState::InProgress);
        assert_eq!(board.available_positions().len(), 9);
    }

    #[test]
    fn test_apply_sets_exactly_one_cell() {
        let board = Board::new();
        let next = board.apply(Move::new(Mark::X, Position::Center)).unwrap();
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.move_count(), 1);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_rejected() {
        let board = play(&[4]);
        let err = board.apply(Move::new(Mark::O, Position::Center)).unwrap_err();
        assert_eq!(err, InvalidMove::Occupied(Position::Center));
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let err = Board::new()
            .apply(Move::new(Mark::O, Position::Center))
            .unwrap_err();
        assert_eq!(err, InvalidMove::WrongTurn(Mark::O));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Board::new().apply_index(Mark::X, 9),
            Err(InvalidMove::OutOfRange(9))
        );
    }

    #[test]
    fn test_terminal_board_rejects_moves() {
        let board = play(&[0, 3, 1, 4, 2]);
        assert_eq!(board.state(), GameState::Won(Mark::X));
        assert_eq!(
            board.apply_index(Mark::O, 8),
            Err(InvalidMove::GameOver)
        );
    }

    #[test]
    fn test_last_move_win_on_full_board_is_not_draw() {
        let board = play(&[0, 1, 2, 3, 6, 5, 8, 7, 4]);
        assert!(board.is_full());
        assert_eq!(board.state(), GameState::Won(Mark::X));
    }

    #[test]
    fn test_display_layout() {
        let board = play(&[0, 4]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " X |   |  ");
        assert_eq!(lines[1], "-----------");
        assert_eq!(lines[2], "   | O |  ");
        assert_eq!(lines.len(), 5);
    }
}

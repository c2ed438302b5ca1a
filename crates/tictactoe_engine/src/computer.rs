//! Computer player: full-depth minimax with alpha-beta pruning.
//!
//! The search explores every continuation, so the computer never loses.
//! Wins are worth more the sooner they happen and losses cost less the later
//! they happen, so an immediate win is always taken and an immediate threat
//! is always blocked. Ties go to the lowest position index.

use crate::{Board, GameState, Mark, Move, Position};
use tracing::{debug, instrument};

const WIN: i32 = 10;

/// Picks the best position for `mark`.
///
/// Returns `None` if the game is over or `mark` is not the mark to move.
#[instrument(skip(board), fields(moves = board.move_count()))]
pub fn best_move(board: &Board, mark: Mark) -> Option<Position> {
    if board.state().is_terminal() {
        return None;
    }

    let mut best: Option<(Position, i32)> = None;
    let mut alpha = i32::MIN + 1;
    for pos in board.available_positions() {
        let Ok(next) = board.apply(Move::new(mark, pos)) else {
            continue;
        };
        let score = -negamax(&next, mark.opponent(), 1, -i32::MAX, -alpha);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
            alpha = alpha.max(score);
        }
    }

    debug!(?best, "Computer chose move");
    best.map(|(pos, _)| pos)
}

/// Score of `board` from the point of view of `mark`, who is to move.
fn negamax(board: &Board, mark: Mark, depth: i32, mut alpha: i32, beta: i32) -> i32 {
    match board.state() {
        GameState::Won(winner) if winner == mark => return WIN - depth,
        GameState::Won(_) => return depth - WIN,
        GameState::Draw => return 0,
        GameState::InProgress => {}
    }

    let mut best = i32::MIN + 1;
    for pos in board.available_positions() {
        let Ok(next) = board.apply(Move::new(mark, pos)) else {
            continue;
        };
        let score = -negamax(&next, mark.opponent(), depth + 1, -beta, -alpha);
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> Board {
        indices.iter().fold(Board::new(), |board, &i| {
            board.apply_index(board.to_move(), i).unwrap()
        })
    }

    #[test]
    fn test_takes_immediate_win() {
        // X: 0, 1   O: 3, 4   X to move wins at 2.
        let board = play(&[0, 3, 1, 4]);
        assert_eq!(best_move(&board, Mark::X), Some(Position::TopRight));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X: 0, 1, 8   O: 3, 4   O to move wins at 5 rather than blocking 2.
        let board = play(&[0, 3, 1, 4, 8]);
        assert_eq!(best_move(&board, Mark::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X: 0, 1   O: 4   O must block at 2.
        let board = play(&[0, 4, 1]);
        assert_eq!(best_move(&board, Mark::O), Some(Position::TopRight));
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board = play(&[0]);
        assert_eq!(best_move(&board, Mark::O), Some(Position::Center));
    }

    #[test]
    fn test_none_when_game_over() {
        let board = play(&[0, 3, 1, 4, 2]);
        assert_eq!(best_move(&board, Mark::O), None);
    }

    #[test]
    fn test_deterministic() {
        let board = play(&[4]);
        assert_eq!(best_move(&board, Mark::O), best_move(&board, Mark::O));
    }
}

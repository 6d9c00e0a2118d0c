//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` holds all three squares of any line.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, mark: Mark) -> bool {
    let want = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == want))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert!(!completes_line(&board, Mark::Player));
        assert!(!completes_line(&board, Mark::Ai));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Mark::Ai));
            }
            assert!(completes_line(&board, Mark::Ai), "line {line:?}");
            assert!(!completes_line(&board, Mark::Player));
        }
    }

    #[test]
    fn test_bottom_row_is_a_line() {
        let board: Board = "... OO. XXX".parse().unwrap();
        assert!(completes_line(&board, Mark::Player));
    }

    #[test]
    fn test_mixed_line_does_not_count() {
        let board: Board = "XXO ... ...".parse().unwrap();
        assert!(!completes_line(&board, Mark::Player));
        assert!(!completes_line(&board, Mark::Ai));
    }
}

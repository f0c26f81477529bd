//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning lines in scan order: rows, then columns, then diagonals.
///
/// The order decides which line is reported when a tampered board completes
/// more than one line at once.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winning mark and the first completed line in [`LINES`]
/// order, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let square = board.get(a);
        match square {
            Square::Occupied(mark) if board.get(b) == square && board.get(c) == square => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), Some((Mark::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        let (mark, line) = check_winner(&board).expect("diagonal should win");
        assert_eq!(mark, Mark::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_earliest_line_wins_on_tampered_board() {
        // X completes the top row and O the middle row.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::O),
        ]);
        assert_eq!(check_winner(&board), Some((Mark::X, LINES[0])));
    }

    #[test]
    fn test_line_indices_match_canonical_order() {
        let indices: Vec<[usize; 3]> = LINES.iter().map(Line::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}

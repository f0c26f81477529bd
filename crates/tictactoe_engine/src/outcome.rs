//! Derived game outcome.

use super::rules::{check_winner, is_full};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An ordered triple of positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Returns the positions in order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices in order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Outcome of the game, derived from the board.
///
/// Once `Win` or `Draw` is reached it stays there until the engine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in scan order.
        line: Line,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true while moves are still accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !self.is_in_progress()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, .. } => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the outcome of a board.
///
/// Pure: the same board always yields the same outcome.
#[instrument(skip(board))]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(detect_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_carries_line() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Mark::O));
        }
        let outcome = detect_outcome(&board);
        assert_eq!(outcome.winner(), Some(Mark::O));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
        assert!(outcome.is_over());
        assert_eq!(outcome.to_string(), "Player O wins");
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X / O O X / O X O
        let mut board = Board::new();
        let marks = [
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        assert_eq!(detect_outcome(&board).winner(), Some(Mark::X));
    }

    #[test]
    fn test_line_contains() {
        let line = Line::new([Position::TopRight, Position::Center, Position::BottomLeft]);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = Outcome::Win {
            mark: Mark::X,
            line: Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        };
        let json = serde_json::to_value(outcome).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "Win": { "mark": "X", "line": ["TopLeft", "TopCenter", "TopRight"] }
            })
        );
    }
}

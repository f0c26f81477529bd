//! What the board shows, derived from engine state.
//!
//! Everything here is a pure function of a [`GameEngine`]; the renderer only
//! maps these values to colors and widgets.

use tictactoe_engine::{GameEngine, Mark, Outcome, Position};

/// Background emphasis for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHighlight {
    /// Plain cell.
    None,
    /// Cell of the most recent move.
    LastMove,
    /// Cell on the winning line. Takes precedence over [`CellHighlight::LastMove`].
    Winning,
}

/// Status line text: the winner, a draw, or whose turn it is.
pub fn status_message(engine: &GameEngine) -> String {
    match engine.outcome() {
        Outcome::Win { mark, .. } => format!("Player {} wins!", mark),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Player {}'s turn", engine.turn()),
    }
}

/// Mark the status line is colored after, if any.
pub fn status_mark(engine: &GameEngine) -> Option<Mark> {
    match engine.outcome() {
        Outcome::Win { mark, .. } => Some(*mark),
        Outcome::Draw => None,
        Outcome::InProgress => Some(engine.turn()),
    }
}

/// Whether the "Your turn" badge shows next to `mark`.
pub fn turn_badge(engine: &GameEngine, mark: Mark) -> bool {
    engine.outcome().is_in_progress() && engine.turn() == mark
}

/// Highlight for the cell at `pos`.
pub fn cell_highlight(engine: &GameEngine, pos: Position) -> CellHighlight {
    if engine
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(pos))
    {
        CellHighlight::Winning
    } else if engine.last_move() == Some(pos) {
        CellHighlight::LastMove
    } else {
        CellHighlight::None
    }
}

/// Descriptive label for a cell, numbered from 1.
pub fn cell_label(engine: &GameEngine, pos: Position) -> String {
    let number = pos.to_index() + 1;
    match engine.board().get(pos).mark() {
        None => format!("Cell {}", number),
        Some(mark) => format!("Cell {} (occupied by {})", number, mark),
    }
}

/// Whether playing the cell at `pos` would be accepted.
pub fn cell_enabled(engine: &GameEngine, pos: Position) -> bool {
    engine.outcome().is_in_progress() && engine.board().is_empty(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &index in indices {
            engine.apply_move(index);
        }
        engine
    }

    #[test]
    fn test_status_in_progress() {
        let engine = play(&[4]);
        assert_eq!(status_message(&engine), "Player O's turn");
        assert_eq!(status_mark(&engine), Some(Mark::O));
    }

    #[test]
    fn test_status_win_and_draw() {
        assert_eq!(status_message(&play(&[0, 3, 1, 4, 2])), "Player X wins!");

        let draw = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert_eq!(status_message(&draw), "It's a draw!");
        assert_eq!(status_mark(&draw), None);
    }

    #[test]
    fn test_badge_hidden_after_win() {
        let engine = play(&[0, 3, 1, 4]);
        assert!(turn_badge(&engine, Mark::X));
        assert!(!turn_badge(&engine, Mark::O));

        let engine = play(&[0, 3, 1, 4, 2]);
        assert!(!turn_badge(&engine, Mark::X));
        assert!(!turn_badge(&engine, Mark::O));
    }

    #[test]
    fn test_winning_highlight_beats_last_move() {
        let engine = play(&[0, 3, 1, 4, 2]);
        assert_eq!(cell_highlight(&engine, Position::TopRight), CellHighlight::Winning);
        assert_eq!(cell_highlight(&engine, Position::TopLeft), CellHighlight::Winning);
        assert_eq!(cell_highlight(&engine, Position::Center), CellHighlight::None);
    }

    #[test]
    fn test_last_move_highlight() {
        let engine = play(&[0, 4]);
        assert_eq!(cell_highlight(&engine, Position::Center), CellHighlight::LastMove);
        assert_eq!(cell_highlight(&engine, Position::TopLeft), CellHighlight::None);
    }

    #[test]
    fn test_cell_labels() {
        let engine = play(&[4]);
        assert_eq!(cell_label(&engine, Position::Center), "Cell 5 (occupied by X)");
        assert_eq!(cell_label(&engine, Position::TopLeft), "Cell 1");
    }

    #[test]
    fn test_cells_disabled_when_occupied_or_over() {
        let engine = play(&[4]);
        assert!(!cell_enabled(&engine, Position::Center));
        assert!(cell_enabled(&engine, Position::TopLeft));

        let engine = play(&[0, 3, 1, 4, 2]);
        assert!(!cell_enabled(&engine, Position::BottomRight));
    }
}

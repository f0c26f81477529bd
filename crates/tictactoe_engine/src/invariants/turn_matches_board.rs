//! Turn invariant: the mark to move follows from the mark counts.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: X is to move exactly when both marks have been played equally
/// often.
///
/// Holds in every phase because the turn flips on every accepted move,
/// including the one that ends the game.
pub struct TurnMatchesBoard;

impl Invariant<GameEngine> for TurnMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Turn alternates with each accepted move (X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(TurnMatchesBoard::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        assert!(TurnMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_unflipped_turn_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);
        engine.turn = Mark::X;
        assert!(!TurnMatchesBoard::holds(&engine));
    }
}

//! Outcome invariant: the stored outcome is the one derived from the board.

use super::super::{GameEngine, detect_outcome};
use super::Invariant;

/// Invariant: the engine's outcome equals [`detect_outcome`] of its board.
pub struct OutcomeConsistent;

impl Invariant<GameEngine> for OutcomeConsistent {
    fn holds(engine: &GameEngine) -> bool {
        *engine.outcome() == detect_outcome(engine.board())
    }

    fn description() -> &'static str {
        "Outcome is derived from the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_holds_through_draw() {
        let mut engine = GameEngine::new();
        for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            engine.apply_move(index);
            assert!(OutcomeConsistent::holds(&engine));
        }
        assert!(engine.outcome().is_draw());
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut engine = GameEngine::new();
        engine.outcome = Outcome::Draw;
        assert!(!OutcomeConsistent::holds(&engine));
    }
}

//! Mark balance invariant: X leads O by at most one mark.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: X has played as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<GameEngine> for MarkBalance {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

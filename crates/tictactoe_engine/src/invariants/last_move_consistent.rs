//! Last-move invariant: the highlighted cell holds the previous mover's mark.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: there is no last move on a blank board, and otherwise the last
/// move points at a cell holding the mark that just moved.
pub struct LastMoveConsistent;

impl Invariant<GameEngine> for LastMoveConsistent {
    fn holds(engine: &GameEngine) -> bool {
        match engine.last_move() {
            None => engine.board().is_blank(),
            Some(pos) => engine.board().get(pos) == Square::Occupied(engine.turn().opponent()),
        }
    }

    fn description() -> &'static str {
        "Last move points at the previous mover's mark"
    }
}

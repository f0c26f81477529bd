//! Monotonic board invariant: a move adds one mark and erases none.

use super::super::{Board, Position, Square};

/// Two-state invariant relating the board before and after a move.
///
/// Every mark present before is still present after, and exactly one
/// previously empty cell became occupied.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Checks the invariant across one transition.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut added = 0;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, Square::Occupied(_)) => added += 1,
                (old, new) if old == new => {}
                _ => return false,
            }
        }
        added == 1
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Board squares are monotonic (one mark added, none changed)"
    }
}

//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}. The engine checks preconditions on every move and
//! postconditions in debug builds.

use super::invariants::{EngineInvariants, InvariantSet, MonotonicBoard};
use super::{GameEngine, MoveError, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once an outcome is reached.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.outcome().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if `pos` holds a mark.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is running and the
/// cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(pos, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game still in progress
/// - Cell must be empty
///
/// Postconditions:
/// - Board grew by exactly one mark and kept every earlier mark
/// - All [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        let mut descriptions = Vec::new();

        if !MonotonicBoard::holds(before.board(), after.board()) {
            descriptions.push(MonotonicBoard::description().to_string());
        }

        if let Err(violations) = EngineInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

//! Reasons a move can be refused.

use super::Position;

/// Error that can occur when validating or applying a move.
///
/// [`GameEngine::apply_move`](crate::GameEngine::apply_move) swallows these;
/// [`GameEngine::try_move`](crate::GameEngine::try_move) returns them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

//! Tic-tac-toe game state engine.
//!
//! The engine owns a 3x3 board, the mark that moves next, the most recent
//! move and the derived outcome. It exposes two mutating operations
//! ([`GameEngine::apply_move`] and [`GameEngine::reset`]) and one pure
//! function ([`detect_outcome`]).
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and the named [`Position`]s
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **Engine**: the single stateful [`GameEngine`]
//! - **Contracts**: preconditions and postconditions guarding each move
//! - **Invariants**: properties of engine state checked after every move
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//!
//! assert_eq!(engine.outcome().winner(), Some(Mark::X));
//!
//! // Late moves are ignored.
//! engine.apply_move(5);
//! assert!(engine.board().is_empty(tictactoe_engine::Position::MiddleRight));
//!
//! engine.reset();
//! assert_eq!(engine.outcome(), &Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use engine::GameEngine;
pub use error::MoveError;
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, LastMoveConsistent,
    MarkBalance, MonotonicBoard, OutcomeConsistent, TurnMatchesBoard,
};
pub use outcome::{Line, Outcome, detect_outcome};
pub use position::Position;
pub use rules::{LINES, check_winner, is_full};
pub use types::{Board, Mark, Square};

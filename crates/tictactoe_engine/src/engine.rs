//! The tic-tac-toe game engine.

use super::contracts::{Contract, MoveContract};
use super::{Board, Mark, MoveError, Outcome, Position, Square, detect_outcome};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the mark that moves next, the last accepted move and the
/// outcome derived from the board. State only changes through
/// [`apply_move`](Self::apply_move), [`try_move`](Self::try_move) and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) last_move: Option<Position>,
    pub(crate) outcome: Outcome,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            last_move: None,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark placed by the next accepted move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the position of the most recent accepted move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the positions still open to play (empty while the game is over).
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Moves on an occupied cell, past the end of the game, or outside the
    /// board are ignored and leave every field unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(reason) = self.try_move(index) {
            debug!(index, %reason, "Move ignored");
        }
    }

    /// Places the current mark at `index` (0-8), reporting why a move was
    /// refused.
    ///
    /// Acceptance and effect are exactly those of
    /// [`apply_move`](Self::apply_move).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index > 8`
    /// - [`MoveError::GameOver`] if the outcome is no longer in progress
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// # Panics
    ///
    /// In debug builds, if the state after the move breaks an engine invariant.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, index: usize) -> Result<Position, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        MoveContract::pre(self, &position)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.turn;
        self.board.set(position, Square::Occupied(mark));
        self.turn = mark.opponent();
        self.last_move = Some(position);
        self.outcome = detect_outcome(&self.board);

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = MoveContract::post(&before, self) {
                tracing::error!(%violation, "Move postcondition failed");
                panic!("move postcondition failed: {violation}");
            }
        }

        debug!(%mark, %position, outcome = %self.outcome, "Move accepted");
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, "Game over");
        }

        Ok(position)
    }

    /// Restores the initial state. Valid at any time.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.last_move = None;
        self.outcome = detect_outcome(&self.board);
        debug!("Game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

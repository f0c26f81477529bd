//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that hold after every transition of a
//! [`GameEngine`](crate::GameEngine). They are testable independently and
//! back the postcondition of [`MoveContract`](crate::MoveContract).

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod last_move_consistent;
pub mod mark_balance;
pub mod monotonic_board;
pub mod outcome_consistent;
pub mod turn_matches_board;

pub use last_move_consistent::LastMoveConsistent;
pub use mark_balance::MarkBalance;
pub use monotonic_board::MonotonicBoard;
pub use outcome_consistent::OutcomeConsistent;
pub use turn_matches_board::TurnMatchesBoard;

/// All single-state engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalance,
    TurnMatchesBoard,
    OutcomeConsistent,
    LastMoveConsistent,
);

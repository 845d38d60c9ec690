//! First-class invariants for the match record.
//!
//! Invariants are logical properties that must hold across every accepted
//! mutation of the record. They are testable independently and serve as
//! documentation of system guarantees.

use std::fmt;

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

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples so concrete invariants compose
/// into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of violations
    /// otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod state_consistent;
pub mod turn_bounds;

pub use mark_balance::MarkBalanceInvariant;
pub use state_consistent::StateConsistentInvariant;
pub use turn_bounds::TurnBoundsInvariant;

/// All match-record invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnBoundsInvariant,
    StateConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::types::Tile;

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let game = Game::setup_game("p1".into(), "p2".into());
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        game.play(&"p1".into(), Tile::new(0, 0)).unwrap();
        game.play(&"p2".into(), Tile::new(1, 1)).unwrap();
        game.play(&"p1".into(), Tile::new(2, 2)).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        game.play(&"p1".into(), Tile::new(0, 0)).unwrap();

        // Plant an extra O the turn counter cannot account for.
        game.board.set(Tile::new(2, 2), crate::types::Mark::O);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::setup_game("p1".into(), "p2".into());

        type TwoInvariants = (MarkBalanceInvariant, TurnBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

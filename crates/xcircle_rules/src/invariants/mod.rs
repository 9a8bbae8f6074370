//! Properties that hold for every reachable game state.
//!
//! The engine checks them in debug builds after each move; tests can check
//! them directly against hand-built states.

use super::engine::GameEngine;

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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
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

mod balanced_marks;
mod full_board;
mod history_consistent;

pub use balanced_marks::BalancedMarksInvariant;
pub use full_board::FullBoardInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// Every invariant of a running game.
pub type GameInvariants = (
    BalancedMarksInvariant,
    HistoryConsistentInvariant,
    FullBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameConfig, Player};

    #[test]
    fn test_holds_for_new_game() {
        let game = GameEngine::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameEngine::new(GameConfig::new(5, 4).unwrap());
        for position in [1, 7, 13, 2, 25] {
            game.place(position).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let mut game = GameEngine::default();
        game.board.set(0, 0, Cell::Occupied(Player::O)).unwrap();
        game.board.set(0, 1, Cell::Occupied(Player::O)).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_holds_after_draw() {
        let mut game = GameEngine::new(GameConfig::new(3, 3).unwrap());
        for position in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            game.place(position).unwrap();
        }
        assert!(game.outcome().is_some_and(|o| o.is_draw()));
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_flags_filled_board_left_in_progress() {
        let mut game = GameEngine::new(GameConfig::new(1, 1).unwrap());
        game.board.set(0, 0, Cell::Occupied(Player::X)).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&FullBoardInvariant::description()));
    }
}

//! Balanced marks invariant: X moves first and players alternate.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(game: &GameEngine) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_holds_after_alternating_moves() {
        let mut game = GameEngine::default();
        game.place(1).unwrap();
        assert!(BalancedMarksInvariant::holds(&game));
        game.place(2).unwrap();
        assert!(BalancedMarksInvariant::holds(&game));
    }

    #[test]
    fn test_detects_o_ahead() {
        let mut game = GameEngine::default();
        game.board.set(1, 1, Cell::Occupied(Player::O)).unwrap();
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}

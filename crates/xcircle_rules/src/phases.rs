//! Game status and terminal outcomes.

use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(super::Player),
    /// Board filled up with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Converts a terminal status into its outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(super::Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Player;
    use super::*;

    #[test]
    fn test_outcome_lines() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Player X wins!");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_status_outcome() {
        assert_eq!(GameStatus::InProgress.outcome(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(
            GameStatus::Won(Player::O).outcome(),
            Some(Outcome::Winner(Player::O))
        );
        assert!(GameStatus::Draw.outcome().is_some_and(|o| o.is_draw()));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}

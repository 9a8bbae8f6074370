//! Full board invariant: a filled board means the game has ended.

use super::super::{GameEngine, GameStatus, is_full};
use super::Invariant;

/// Invariant: the game is over once no empty cell remains, and a draw is
/// only ever declared on a full board.
pub struct FullBoardInvariant;

impl Invariant<GameEngine> for FullBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let full = is_full(game.board());
        match game.status() {
            GameStatus::InProgress => !full,
            GameStatus::Draw => full,
            GameStatus::Won(_) => true,
        }
    }

    fn description() -> &'static str {
        "Game ends exactly when the board fills without a win"
    }
}

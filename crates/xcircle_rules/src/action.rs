//! Moves and move errors.
//!
//! A move is a player's intent to mark a cell. It is validated against the
//! board before it is applied, and every applied move is kept in the game
//! history.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark at a 1-based linear position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The 1-based linear position of the marked cell.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: the play loop reports them and lets the same
/// player try again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside `1..=max`.
    #[display("Invalid position. Please choose a number within the range.")]
    OutOfRange {
        /// The rejected position.
        position: i64,
        /// Largest valid position.
        max: usize,
    },

    /// The cell at the position already holds a mark.
    #[display("Position already taken. Choose another.")]
    Occupied(usize),

    /// The input could not be read as a number.
    #[display("Invalid input '{}'. Please enter a number.", _0)]
    NotANumber(String),

    /// A player tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

//! Pure game logic for N-by-N connect-M ("X and circle").
//!
//! Two players take turns marking cells of a square board; the first to
//! line up `win_length` marks in a row, column or diagonal wins, and a full
//! board without such a run is a draw.
//!
//! ```
//! use xcircle_rules::{GameConfig, GameEngine, GameStatus, Player};
//!
//! let mut game = GameEngine::new(GameConfig::new(3, 3)?);
//! for position in [1, 2, 4, 5] {
//!     game.place(position)?;
//! }
//! assert_eq!(game.place(7)?, GameStatus::Won(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod invariants;
mod phases;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use config::{
    ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, GameConfig, MAX_BOARD_SIZE,
};
pub use engine::GameEngine;
pub use invariants::{
    BalancedMarksInvariant, FullBoardInvariant, GameInvariants, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use phases::{GameStatus, Outcome};
pub use rules::{Line, check_win, is_draw, is_full, winning_line};
pub use types::{Board, Cell, Player};

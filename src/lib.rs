//! Xcircle - terminal N-by-N connect-M game
//!
//! Two players share one terminal and take turns entering cell numbers.
//! The first to line up `win_length` marks in a row, column or diagonal
//! wins; a full board without one is a draw.
//!
//! # Architecture
//!
//! - **Rules** (`xcircle_rules`): board, move validation, win and draw detection
//! - **Settings**: board dimensions from a TOML file and the command line
//! - **Session**: the blocking read-validate-apply loop over text streams
//!
//! # Example
//!
//! ```
//! use xcircle::{GameConfig, GameEngine, Outcome, Player, Session};
//!
//! let game = GameEngine::new(GameConfig::new(3, 3)?);
//! let input = "1\n2\n4\n5\n7\n";
//! let mut session = Session::new(game, input.as_bytes(), Vec::new(), Vec::new());
//! assert_eq!(session.play()?, Outcome::Winner(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod session;
mod settings;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Settings
pub use settings::{Settings, SettingsError};

// Crate-level exports - Play loop
pub use session::{Session, SessionError, parse_position};

// Crate-level exports - Game types
pub use xcircle_rules::{
    Board, Cell, ConfigError, GameConfig, GameEngine, GameStatus, Line, MAX_BOARD_SIZE, Move,
    MoveError, Outcome, Player,
};

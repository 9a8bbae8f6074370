//! Board dimensions and win length.

use serde::Serialize;
use tracing::{debug, instrument};

/// Board side length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Win length used when nothing else is configured.
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 1000;

/// Immutable game dimensions.
///
/// Always satisfies `MAX_BOARD_SIZE >= board_size >= win_length > 0`; the
/// only way to build one is through [`GameConfig::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameConfig {
    board_size: usize,
    win_length: usize,
}

impl GameConfig {
    /// Validates and creates a configuration.
    ///
    /// Inputs are signed so that negative values from the command line can
    /// be rejected rather than wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if either value is not
    /// positive, the win length exceeds the board size, or the board size
    /// exceeds [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(board_size: i64, win_length: i64) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidConfiguration {
            board_size,
            win_length,
        };
        if board_size <= 0 || win_length <= 0 || board_size < win_length {
            debug!("Rejected game configuration");
            return Err(invalid);
        }
        let size = usize::try_from(board_size)
            .ok()
            .filter(|size| *size <= MAX_BOARD_SIZE)
            .ok_or_else(|| {
                debug!(max = MAX_BOARD_SIZE, "Board size too large");
                invalid
            })?;
        Ok(Self {
            board_size: size,
            win_length: usize::try_from(win_length).map_err(|_| invalid)?,
        })
    }

    /// Side length N of the board.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Consecutive marks M needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells, which is also the maximum number of turns.
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Error raised when game dimensions are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Sizes are non-positive or the win length exceeds the board size.
    #[display("Invalid board or win condition size.")]
    InvalidConfiguration {
        /// Requested board size.
        board_size: i64,
        /// Requested win length.
        win_length: i64,
    },
}

impl std::error::Error for ConfigError {}

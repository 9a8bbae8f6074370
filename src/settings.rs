//! Game settings loaded from a TOML file and the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use xcircle_rules::{ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, GameConfig};

/// Unvalidated board dimensions.
///
/// Missing values fall back to a 4x4 board with win length 4. Validation
/// happens in [`Settings::game_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Side length of the board.
    board_size: Option<i64>,

    /// Marks in a row needed to win.
    win_length: Option<i64>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            SettingsError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(
            board_size = ?settings.board_size,
            win_length = ?settings.win_length,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Replaces values with the ones given, keeping the current value where
    /// an override is `None`.
    pub fn with_overrides(self, board_size: Option<i64>, win_length: Option<i64>) -> Self {
        Self {
            board_size: board_size.or(self.board_size),
            win_length: win_length.or(self.win_length),
        }
    }

    /// Validates the settings into a [`GameConfig`].
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            self.board_size.unwrap_or(DEFAULT_BOARD_SIZE as i64),
            self.win_length.unwrap_or(DEFAULT_WIN_LENGTH as i64),
        )
    }
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

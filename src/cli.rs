//! Command-line interface for xcircle.

use crate::settings::{Settings, SettingsError};
use clap::Parser;
use tracing::instrument;

/// Xcircle - two players, one N-by-N board, first to line up M marks wins
#[derive(Parser, Debug)]
#[command(name = "xcircle")]
#[command(about = "Terminal connect-M game for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Side length N of the board [default: 4]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub board_size: Option<i64>,

    /// Marks M in a row needed to win [default: 4]
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub win_length: Option<i64>,

    /// TOML file with `board_size` and `win_length` keys
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

impl Cli {
    /// Resolves settings: config file first, then command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the config file cannot be read or parsed.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let base = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        Ok(base.with_overrides(self.board_size, self.win_length))
    }
}

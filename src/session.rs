//! Interactive play loop over a pair of text streams.
//!
//! The loop renders the board, prompts the player to move, reads one
//! position per line and feeds it to the engine. Bad input is reported on
//! the error stream and the same player is asked again; only I/O failures
//! and closed input end the session early.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info, instrument};
use xcircle_rules::{GameEngine, MoveError, Outcome};

/// Error that ends a session before the game is decided.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ran out before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parses one line of player input into a position.
///
/// Anything that is not an integer is a [`MoveError::NotANumber`]; range
/// and occupancy are checked later by the engine. Integers too large for
/// `i64` saturate so the engine reports them as out of range.
#[instrument]
pub fn parse_position(input: &str) -> Result<i64, MoveError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(position) => Ok(position),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MoveError::NotANumber(trimmed.to_string())),
        },
    }
}

/// A game wired to an input stream, an output stream and an error stream.
#[derive(Debug)]
pub struct Session<R, W, E> {
    game: GameEngine,
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session around an existing game.
    pub fn new(game: GameEngine, input: R, output: W, errors: E) -> Self {
        Self {
            game,
            input,
            output,
            errors,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Consumes the session, returning the game and both output streams.
    pub fn into_parts(self) -> (GameEngine, W, E) {
        (self.game, self.output, self.errors)
    }

    /// Plays until one player wins or the board fills up.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InputClosed`] if input ends mid-game.
    /// - [`SessionError::Io`] if a stream fails.
    #[instrument(skip(self), fields(
        board_size = self.game.config().board_size(),
        win_length = self.game.config().win_length(),
    ))]
    pub fn play(&mut self) -> Result<Outcome, SessionError> {
        info!("Game started");
        loop {
            if let Some(outcome) = self.game.outcome() {
                write!(self.output, "{}", self.game.board())?;
                writeln!(self.output, "{}", outcome)?;
                self.output.flush()?;
                info!(
                    %outcome,
                    winner = ?outcome.winner(),
                    turns = self.game.turns(),
                    "Game finished"
                );
                return Ok(outcome);
            }

            write!(self.output, "{}", self.game.board())?;
            self.prompt()?;

            let line = self.read_line()?;
            match parse_position(&line).and_then(|position| self.game.place(position)) {
                Ok(status) => debug!(?status, "Move accepted"),
                Err(err) => {
                    debug!(%err, player = %self.game.to_move(), "Move rejected");
                    writeln!(self.errors, "{}", err)?;
                    self.errors.flush()?;
                }
            }
        }
    }

    fn prompt(&mut self) -> Result<(), SessionError> {
        write!(
            self.output,
            "Player {}, enter your move (1-{}): ",
            self.game.to_move(),
            self.game.config().cell_count()
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads the next non-blank line.
    fn read_line(&mut self) -> Result<String, SessionError> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }
}

//! Turn-by-turn game engine.
//!
//! `GameEngine` owns the board, the player to move and the move history.
//! A turn is `validate_move` → `apply_move` → `check_win` → draw check →
//! switch player; [`GameEngine::place`] runs the whole sequence.

use super::action::{Move, MoveError};
use super::config::GameConfig;
use super::invariants::{GameInvariants, InvariantSet};
use super::phases::{GameStatus, Outcome};
use super::rules;
use super::types::{Board, Cell, Player};
use tracing::{debug, info, instrument};

/// Game engine for an N-by-N board with win length M.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.board_size()),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the configuration this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played so far.
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Checks that `position` names an empty cell and returns its
    /// `(row, column)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `position` is outside `1..=N*N`.
    /// - [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn validate_move(&self, position: i64) -> Result<(usize, usize), MoveError> {
        let max = self.board.cell_count();
        let (row, column) = usize::try_from(position)
            .ok()
            .and_then(|p| self.board.coords(p))
            .ok_or(MoveError::OutOfRange { position, max })?;

        if !self.board.is_empty(row, column) {
            return Err(MoveError::Occupied(position as usize));
        }
        Ok((row, column))
    }

    /// Writes `player`'s mark at `position` and records the move.
    ///
    /// Does not switch players; [`GameEngine::place`] is the public way to
    /// play a turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::WrongPlayer`] if `player` is not the one to move.
    /// - Any error from [`GameEngine::validate_move`].
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub(crate) fn apply_move(
        &mut self,
        position: i64,
        player: Player,
    ) -> Result<(usize, usize), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        let (row, column) = self.validate_move(position)?;
        self.board
            .set(row, column, Cell::Occupied(player))
            .map_err(|_| MoveError::OutOfRange {
                position,
                max: self.board.cell_count(),
            })?;
        self.history.push(Move::new(player, position as usize));
        debug!(row, column, turns = self.history.len(), "Mark placed");
        Ok((row, column))
    }

    /// Checks whether `player` has a winning run through `(row, column)`.
    pub fn check_win(&self, row: usize, column: usize, player: Player) -> bool {
        rules::check_win(&self.board, row, column, player, self.config.win_length())
    }

    /// Renders the board as text.
    pub fn render_board(&self) -> String {
        self.board.display()
    }

    /// Plays one full turn for the player to move.
    ///
    /// On success returns the new status: `Won` if the move completed a run,
    /// `Draw` if it filled the board, otherwise `InProgress` with the other
    /// player to move. On error nothing changes and the same player is still
    /// to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - Any error from [`GameEngine::validate_move`].
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, position: i64) -> Result<GameStatus, MoveError> {
        let player = self.to_move;
        let (row, column) = self.apply_move(position, player)?;

        if self.check_win(row, column, player) {
            info!(%player, turns = self.turns(), "Game won");
            self.status = GameStatus::Won(player);
        } else if rules::is_draw(self.turns(), &self.board) {
            info!(turns = self.turns(), "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "Game invariants violated after move"
        );
        Ok(self.status)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

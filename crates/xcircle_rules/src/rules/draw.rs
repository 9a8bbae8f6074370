//! Draw detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A game is drawn once every cell has been played without a win.
///
/// Callers check for a win first; this only compares the turn count.
pub fn is_draw(turns: usize, board: &Board) -> bool {
    turns == board.cell_count()
}

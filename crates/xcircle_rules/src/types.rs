//! Core domain types for the N-by-N board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Square board of runtime size.
///
/// Cells are stored flat in row-major order, so `(row, column)` lives at
/// `row * size + column` and the user-facing linear position is that index
/// plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// Sizes come from a validated [`GameConfig`](crate::GameConfig), which
    /// keeps `size * size` small.
    #[instrument]
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Converts a 1-based linear position into `(row, column)`.
    ///
    /// Returns `None` when the position falls outside `1..=size*size`.
    pub fn coords(&self, position: usize) -> Option<(usize, usize)> {
        if position == 0 || position > self.cell_count() {
            return None;
        }
        let index = position - 1;
        Some((index / self.size, index % self.size))
    }

    /// Gets the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column).copied()
    }

    /// Sets the cell at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), &'static str> {
        if row >= self.size || column >= self.size {
            return Err("Cell out of bounds");
        }
        self.cells[row * self.size + column] = cell;
        Ok(())
    }

    /// Checks if the cell at `(row, column)` is empty.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        matches!(self.get(row, column), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Counts all occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based position, occupied cells show the
    /// mark. Cells are joined by `" | "` and rows are separated by a line of
    /// `4 * size - 3` dashes. Every row ends with a newline.
    pub fn display(&self) -> String {
        let divider = "-".repeat((self.size * 4).saturating_sub(3));
        let mut result = String::new();
        for row in 0..self.size {
            for column in 0..self.size {
                let index = row * self.size + column;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if column + 1 < self.size {
                    result.push_str(" | ");
                }
            }
            result.push('\n');
            if row + 1 < self.size {
                result.push_str(&divider);
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

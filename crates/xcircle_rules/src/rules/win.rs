//! Win detection through the most recently marked cell.

use super::super::{Board, Cell, Player};
use tracing::{debug, instrument};

/// A line through a cell that can hold a winning run.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Line {
    /// The full row of the cell.
    Row,
    /// The full column of the cell.
    Column,
    /// Top-left to bottom-right diagonal.
    MainDiagonal,
    /// Top-right to bottom-left diagonal.
    AntiDiagonal,
}

impl Line {
    /// Cells of this line through `(row, column)`, in scan order.
    ///
    /// Rows and columns span the whole board. Diagonals only cover offsets
    /// `-win_length..=win_length` from the cell, clipped to the board.
    fn cells(
        self,
        board: &Board,
        row: usize,
        column: usize,
        win_length: usize,
    ) -> Vec<Cell> {
        let n = board.size();
        match self {
            Line::Row => (0..n).filter_map(|c| board.get(row, c)).collect(),
            Line::Column => (0..n).filter_map(|r| board.get(r, column)).collect(),
            Line::MainDiagonal => diagonal(board, row, column, win_length, 1),
            Line::AntiDiagonal => diagonal(board, row, column, win_length, -1),
        }
    }
}

fn diagonal(board: &Board, row: usize, column: usize, win_length: usize, step: isize) -> Vec<Cell> {
    let reach = win_length as isize;
    let n = board.size() as isize;
    (-reach..=reach)
        .filter_map(|i| {
            let r = row as isize + i;
            let c = column as isize + i * step;
            if (0..n).contains(&r) && (0..n).contains(&c) {
                board.get(r as usize, c as usize)
            } else {
                None
            }
        })
        .collect()
}

/// Run-length scan: true once `win_length` consecutive cells hold `player`.
fn has_run(cells: &[Cell], player: Player, win_length: usize) -> bool {
    let mut count = 0;
    for cell in cells {
        count = if *cell == Cell::Occupied(player) { count + 1 } else { 0 };
        if count == win_length {
            return true;
        }
    }
    false
}

/// Returns the first line through `(row, column)` where `player` has
/// `win_length` marks in a row.
///
/// Lines are checked in the order row, column, main diagonal, anti-diagonal.
#[instrument(skip(board))]
pub fn winning_line(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
    win_length: usize,
) -> Option<Line> {
    let line = <Line as strum::IntoEnumIterator>::iter()
        .find(|line| has_run(&line.cells(board, row, column, win_length), player, win_length));
    if let Some(line) = line {
        debug!(%line, "Winning run found");
    }
    line
}

/// Checks whether the mark at `(row, column)` completed a winning run.
pub fn check_win(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
    win_length: usize,
) -> bool {
    winning_line(board, row, column, player, win_length).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, p) in marks {
            board.set(r, c, Cell::Occupied(p)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::new(3);
        assert!(!check_win(&board, 1, 1, Player::X, 3));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(4, &[(2, 0, Player::O), (2, 1, Player::O), (2, 2, Player::O)]);
        assert_eq!(winning_line(&board, 2, 1, Player::O, 3), Some(Line::Row));
        assert!(!check_win(&board, 2, 1, Player::X, 3));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(0, 0, Player::X), (1, 0, Player::X), (2, 0, Player::X)]);
        assert_eq!(winning_line(&board, 2, 0, Player::X, 3), Some(Line::Column));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(5, &[(1, 1, Player::X), (2, 2, Player::X), (3, 3, Player::X)]);
        assert_eq!(winning_line(&board, 3, 3, Player::X, 3), Some(Line::MainDiagonal));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(
            4,
            &[
                (0, 3, Player::O),
                (1, 2, Player::O),
                (2, 1, Player::O),
                (3, 0, Player::O),
            ],
        );
        assert_eq!(winning_line(&board, 1, 2, Player::O, 4), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_off_center_diagonal_win() {
        // Diagonal that does not pass through a corner of the board.
        let board = board_with(
            5,
            &[
                (0, 1, Player::X),
                (1, 2, Player::X),
                (2, 3, Player::X),
                (3, 4, Player::X),
            ],
        );
        assert_eq!(winning_line(&board, 0, 1, Player::X, 4), Some(Line::MainDiagonal));
        assert_eq!(winning_line(&board, 3, 4, Player::X, 4), Some(Line::MainDiagonal));
    }

    #[test]
    fn test_broken_run_does_not_win() {
        let board = board_with(
            5,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::O),
                (0, 3, Player::X),
                (0, 4, Player::X),
            ],
        );
        assert!(!check_win(&board, 0, 4, Player::X, 3));
        assert!(check_win(&board, 0, 4, Player::X, 2));
    }

    #[test]
    fn test_row_checked_before_column() {
        let board = board_with(
            3,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::X),
                (1, 0, Player::X),
                (2, 0, Player::X),
            ],
        );
        assert_eq!(winning_line(&board, 0, 0, Player::X, 3), Some(Line::Row));
    }

    #[test]
    fn test_win_length_one() {
        let board = board_with(2, &[(1, 1, Player::O)]);
        assert!(check_win(&board, 1, 1, Player::O, 1));
    }
}

//! Tests for the game engine through the public API.

use xcircle::{
    Cell, GameConfig, GameEngine, GameStatus, MAX_BOARD_SIZE, MoveError, Outcome, Player,
};

fn engine(n: i64, m: i64) -> GameEngine {
    GameEngine::new(GameConfig::new(n, m).expect("valid config"))
}

#[test]
fn test_construction_bounds() {
    for n in 1..=6 {
        for m in 1..=6 {
            assert_eq!(GameConfig::new(n, m).is_ok(), n >= m, "n={n} m={m}");
        }
    }
    assert!(GameConfig::new(0, 1).is_err());
    assert!(GameConfig::new(4, -1).is_err());
}

#[test]
fn test_board_size_cap() {
    let max = MAX_BOARD_SIZE as i64;
    let game = engine(max, 3);
    assert_eq!(game.config().cell_count(), MAX_BOARD_SIZE * MAX_BOARD_SIZE);
    assert!(GameConfig::new(max + 1, 3).is_err());
    assert!(GameConfig::new(i64::MAX, 3).is_err());
}

#[test]
fn test_validate_succeeds_iff_empty() {
    let mut game = engine(4, 3);
    for position in [3, 8, 11] {
        game.place(position).unwrap();
    }
    for position in 1..=16 {
        let (row, column) = (((position - 1) / 4) as usize, ((position - 1) % 4) as usize);
        let empty = game.board().get(row, column) == Some(Cell::Empty);
        assert_eq!(game.validate_move(position).is_ok(), empty, "position {position}");
    }
}

#[test]
fn test_out_of_range_positions() {
    for n in 1..=5 {
        let game = engine(n, 1);
        let max = n * n;
        assert_eq!(
            game.validate_move(0),
            Err(MoveError::OutOfRange { position: 0, max: max as usize })
        );
        assert_eq!(
            game.validate_move(max + 1),
            Err(MoveError::OutOfRange { position: max + 1, max: max as usize })
        );
    }
}

#[test]
fn test_classic_left_column_win() {
    let mut game = engine(3, 3);
    for position in [1, 2, 4, 5] {
        assert_eq!(game.place(position), Ok(GameStatus::InProgress));
    }
    assert_eq!(game.place(7), Ok(GameStatus::Won(Player::X)));
    assert!(game.check_win(2, 0, Player::X));
    assert!(!game.check_win(2, 0, Player::O));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
    assert_eq!(game.turns(), 5);
}

#[test]
fn test_o_can_win() {
    let mut game = engine(4, 3);
    // O builds the main diagonal 6, 11, 16 while X scatters.
    for position in [1, 6, 2, 11, 13] {
        game.place(position).unwrap();
    }
    assert_eq!(game.place(16), Ok(GameStatus::Won(Player::O)));
}

#[test]
fn test_four_by_four_draw() {
    let mut game = engine(4, 4);
    let moves = [1, 3, 2, 4, 7, 5, 8, 6, 9, 11, 10, 12, 15, 13, 16];
    for position in moves {
        assert_eq!(game.place(position), Ok(GameStatus::InProgress), "move {position}");
    }
    assert_eq!(game.place(14), Ok(GameStatus::Draw));
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.turns(), 16);
}

#[test]
fn test_terminates_within_cell_count() {
    for n in 1..=5 {
        let mut game = engine(n, n);
        let mut turns = 0;
        for position in 1..=n * n {
            turns += 1;
            if game.place(position).unwrap().is_over() {
                break;
            }
        }
        assert!(game.status().is_over());
        assert!(turns <= n * n);
    }
}

#[test]
fn test_history_records_moves() {
    let mut game = engine(3, 3);
    game.place(5).unwrap();
    game.place(1).unwrap();
    let history: Vec<_> = game.history().iter().map(|m| (m.player(), m.position())).collect();
    assert_eq!(history, vec![(Player::X, 5), (Player::O, 1)]);
}

use tictactoe_common::tictactoe::{BOARD_SIZE, CELL_COUNT, Difficulty, Player, Position};

use crate::config::PlayMode;

/// Accepts a cell number `1`-`9` or a 1-based `row col` pair.
pub fn parse_move(line: &str) -> Option<Position> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;

    match numbers.as_slice() {
        &[cell] if (1..=CELL_COUNT).contains(&cell) => Position::from_index(cell - 1),
        &[row, col] if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) => {
            Some(Position::new(row - 1, col - 1))
        }
        _ => None,
    }
}

fn first_char(line: &str) -> Option<char> {
    line.trim_start().chars().next()
}

pub fn parse_mode(line: &str, default: PlayMode) -> PlayMode {
    match first_char(line) {
        Some('1') => PlayMode::VsBot,
        Some('2') => PlayMode::VsHuman,
        _ => default,
    }
}

pub fn parse_side(line: &str, default: Player) -> Player {
    match first_char(line) {
        Some('x' | 'X') => Player::First,
        Some('o' | 'O') => Player::Second,
        _ => default,
    }
}

pub fn parse_difficulty(line: &str, default: Difficulty) -> Difficulty {
    match first_char(line) {
        Some('1') => Difficulty::Easy,
        Some('2') => Difficulty::Hard,
        _ => default,
    }
}

pub fn is_yes(line: &str) -> bool {
    matches!(first_char(line), Some('y' | 'Y'))
}

use super::board::Board;
use super::types::{BOARD_SIZE, Cell, Outcome, Position, WinningLine};

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

const LINES: [[Position; BOARD_SIZE]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

/// Classifies the board. Pure; safe on hand-built boards that no real game
/// could reach.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::win_for(line.player);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// First uniform, non-empty line among rows, columns and diagonals.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|p| cells[p.row][p.col]);
        match a {
            Cell::Mark(player) if a == b && b == c => Some(WinningLine::new(player, *line)),
            _ => None,
        }
    })
}

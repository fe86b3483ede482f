use std::io::{self, Write};
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Cell, Difficulty, Player, WinningLine};

use crate::config::PlayMode;

pub fn symbol(player: Player) -> char {
    match player {
        Player::First => 'X',
        Player::Second => 'O',
    }
}

fn cell_symbol(cell: Cell) -> char {
    cell.player().map_or(' ', symbol)
}

pub fn difficulty_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Hard => "Hard",
    }
}

pub fn write_instructions(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=========== TIC-TAC-TOE ===========")?;
    writeln!(out, "You can enter your move as either:")?;
    writeln!(out, "  * A single number 1-9 (as below), or")?;
    writeln!(out, "  * Row and column as: 1 3  (row=1, col=3)")?;
    writeln!(out)?;
    writeln!(out, "Cell numbers:")?;
    writeln!(out, "  1 | 2 | 3")?;
    writeln!(out, " ---+---+---")?;
    writeln!(out, "  4 | 5 | 6")?;
    writeln!(out, " ---+---+---")?;
    writeln!(out, "  7 | 8 | 9")?;
    writeln!(out)
}

pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    for (row, cells) in board.cells().iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .map(|&cell| format!(" {} ", cell_symbol(cell)))
            .collect();
        writeln!(out, "{}", line.join("|"))?;
        if row + 1 < BOARD_SIZE {
            writeln!(out, "---+---+---")?;
        }
    }
    writeln!(out)
}

/// One-based `row col` of the two ends of a completed line.
pub fn write_winning_line(out: &mut impl Write, line: &WinningLine) -> io::Result<()> {
    let (start, end) = (line.start(), line.end());
    writeln!(
        out,
        "Winning line: {} {} -> {} {}",
        start.row + 1,
        start.col + 1,
        end.row + 1,
        end.col + 1
    )
}

pub fn write_summary(
    out: &mut impl Write,
    mode: PlayMode,
    human: Player,
    difficulty: Difficulty,
) -> io::Result<()> {
    match mode {
        PlayMode::VsBot => writeln!(
            out,
            "\nSummary: Human({}) vs Bot({}), Difficulty: {}\n",
            symbol(human),
            symbol(human.opponent()),
            difficulty_name(difficulty)
        ),
        PlayMode::VsHuman => writeln!(out, "\nSummary: Human vs Human\n"),
    }
}

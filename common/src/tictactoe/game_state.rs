use crate::error::EngineError;
use super::board::Board;
use super::types::{Outcome, Player, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// A board plus whose turn it is. `First` always opens. The outcome is
/// never stored; it is read off the board on every query.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    current: Player,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for the move policy's in-place search.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Places the current player's mark and passes the turn.
    pub fn play(&mut self, pos: Position) -> Result<Outcome, EngineError> {
        if self.outcome().is_terminal() {
            return Err(EngineError::GameOver);
        }

        self.board.place(pos, self.current)?;
        let outcome = self.outcome();

        if !outcome.is_terminal() {
            self.current = self.current.opponent();
        }

        Ok(outcome)
    }
}

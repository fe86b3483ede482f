use crate::error::EngineError;
use crate::session_rng::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::search::best_move;
use super::types::{Difficulty, Player, Position};

/// Picks the automated player's next cell. The board is borrowed mutably only
/// so the search can explore in place; it is returned unchanged.
///
/// Callers are expected to ask only while the game is in progress. On a full
/// board both difficulties fail with `NoLegalMove`; Hard also does so on a
/// board that is already won.
pub fn choose_move(
    board: &mut Board,
    me: Player,
    opponent: Player,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    let position = match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Hard => calculate_minimax_move(board, me, opponent),
    }?;

    log_debug!(
        "{:?} bot ({:?}) chose ({}, {})",
        difficulty,
        me,
        position.row,
        position.col
    );
    Ok(position)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, EngineError> {
    let available_moves: Vec<Position> = board.empty_cells().collect();
    if available_moves.is_empty() {
        return Err(EngineError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

fn calculate_minimax_move(
    board: &mut Board,
    me: Player,
    opponent: Player,
) -> Result<Position, EngineError> {
    let (result, stats) = best_move(board, me, opponent);
    log_debug!(
        "minimax score {} after {} nodes, {} cutoffs",
        result.score,
        stats.nodes,
        stats.cutoffs
    );
    result.cell.ok_or(EngineError::NoLegalMove)
}

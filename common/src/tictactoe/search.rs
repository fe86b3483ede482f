//! Exhaustive minimax with alpha-beta pruning.
//!
//! Scores are from the searching side's point of view: `WIN_SCORE - depth` for
//! a win, `depth - WIN_SCORE` for a loss, `0` for a draw. The depth term makes
//! the engine take the fastest win and postpone a forced loss.
//!
//! The board is explored in place: every trial mark is cleared again before
//! the next sibling is tried, including on a cutoff.

use super::board::Board;
use super::types::{Outcome, Player, Position};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;
/// Initial window bounds. Any reachable score lies strictly inside.
pub const ALPHA_INIT: i32 = -1000;
pub const BETA_INIT: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` only when the searched board had no empty cell or was terminal.
    pub cell: Option<Position>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes entered, root included.
    pub nodes: u64,
    /// Number of nodes whose remaining siblings were pruned.
    pub cutoffs: u64,
}

struct SearchContext {
    me: Player,
    opponent: Player,
    stats: SearchStats,
}

pub fn search(
    board: &mut Board,
    me: Player,
    opponent: Player,
    depth: i32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult {
    search_with_stats(board, me, opponent, depth, alpha, beta, maximizing).0
}

pub fn search_with_stats(
    board: &mut Board,
    me: Player,
    opponent: Player,
    depth: i32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (SearchResult, SearchStats) {
    let mut ctx = SearchContext {
        me,
        opponent,
        stats: SearchStats::default(),
    };
    let result = alphabeta(board, &mut ctx, depth, alpha, beta, maximizing);
    (result, ctx.stats)
}

/// Search from the root with the full window, `me` to move.
pub fn best_move(board: &mut Board, me: Player, opponent: Player) -> (SearchResult, SearchStats) {
    search_with_stats(board, me, opponent, 0, ALPHA_INIT, BETA_INIT, true)
}

fn terminal_score(outcome: Outcome, me: Player, depth: i32) -> Option<i32> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(0),
        _ if outcome.winner() == Some(me) => Some(WIN_SCORE - depth),
        _ => Some(depth - WIN_SCORE),
    }
}

fn alphabeta(
    board: &mut Board,
    ctx: &mut SearchContext,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> SearchResult {
    ctx.stats.nodes += 1;

    if let Some(score) = terminal_score(evaluate(board), ctx.me, depth) {
        return SearchResult { score, cell: None };
    }

    let mover = if maximizing { ctx.me } else { ctx.opponent };
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        cell: None,
    };

    let candidates: Vec<Position> = board.empty_cells().collect();
    for cell in candidates {
        let placed = board.place(cell, mover);
        debug_assert!(placed.is_ok(), "empty cell rejected: {:?}", cell);
        let score = alphabeta(board, ctx, depth + 1, alpha, beta, !maximizing).score;
        board.clear(cell);

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    cell: Some(cell),
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    cell: Some(cell),
                };
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::board_from_rows;
    use std::collections::HashSet;

    /// Plain minimax over the whole tree, no window.
    fn brute_force(board: &mut Board, me: Player, depth: i32, maximizing: bool) -> i32 {
        if let Some(score) = terminal_score(evaluate(board), me, depth) {
            return score;
        }
        let mover = if maximizing { me } else { me.opponent() };
        let cells: Vec<Position> = board.empty_cells().collect();
        let mut scores = Vec::with_capacity(cells.len());
        for cell in cells {
            board.place(cell, mover).unwrap();
            scores.push(brute_force(board, me, depth + 1, !maximizing));
            board.clear(cell);
        }
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    /// Every board reachable by alternating play from the empty board that is
    /// still in progress, paired with the side to move.
    fn reachable_in_progress() -> Vec<(Board, Player)> {
        fn walk(
            board: &mut Board,
            to_move: Player,
            seen: &mut HashSet<Board>,
            out: &mut Vec<(Board, Player)>,
        ) {
            if evaluate(board).is_terminal() || !seen.insert(board.clone()) {
                return;
            }
            out.push((board.clone(), to_move));
            let cells: Vec<Position> = board.empty_cells().collect();
            for cell in cells {
                board.place(cell, to_move).unwrap();
                walk(board, to_move.opponent(), seen, out);
                board.clear(cell);
            }
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        walk(&mut Board::new(), Player::First, &mut seen, &mut out);
        out
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let (result, _) = best_move(&mut board, Player::First, Player::Second);

        assert_eq!(result.score, 0);
        let cell = result.cell.unwrap();

        board.place(cell, Player::First).unwrap();
        let verified = brute_force(&mut board, Player::First, 1, false);
        assert_eq!(verified, 0);
    }

    #[test]
    fn test_empty_board_picks_first_row_major_draw() {
        let mut board = Board::new();
        let (result, _) = best_move(&mut board, Player::First, Player::Second);
        assert_eq!(result.cell, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_forced_block() {
        let mut board = board_from_rows(["XX ", " O ", "   "]);
        let (result, _) = best_move(&mut board, Player::Second, Player::First);

        assert_eq!(result.cell, Some(Position::new(0, 2)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = board_from_rows(["OO ", "XX ", "X  "]);
        let (result, _) = best_move(&mut board, Player::Second, Player::First);

        assert_eq!(result.cell, Some(Position::new(0, 2)));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X to move can block O at (1,2) or win at (2,1).
        let mut board = board_from_rows(["X O", "OO ", "X X"]);
        let (result, _) = best_move(&mut board, Player::First, Player::Second);

        assert_eq!(result.cell, Some(Position::new(2, 1)));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_delays_forced_loss() {
        // Every O move loses. Blocking at (2,0) holds out two plies longer.
        let mut board = board_from_rows(["XO ", "X  ", "   "]);
        let (result, _) = best_move(&mut board, Player::Second, Player::First);

        assert_eq!(result.cell, Some(Position::new(2, 0)));
        assert_eq!(result.score, 4 - WIN_SCORE);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board_from_rows(["X  ", " O ", "  X"]);
        let snapshot = board.clone();

        best_move(&mut board, Player::Second, Player::First);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_terminal_board_has_no_cell() {
        let mut board = board_from_rows(["XXX", "OO ", "   "]);
        let result = search(&mut board, Player::Second, Player::First, 0, ALPHA_INIT, BETA_INIT, true);

        assert_eq!(result.cell, None);
        assert_eq!(result.score, -WIN_SCORE);
    }

    #[test]
    fn test_pruning_matches_brute_force_on_all_reachable_boards() {
        for (board, to_move) in reachable_in_progress() {
            let mut board = board;
            let snapshot = board.clone();

            let pruned = search(
                &mut board,
                to_move,
                to_move.opponent(),
                0,
                ALPHA_INIT,
                BETA_INIT,
                true,
            );
            let exact = brute_force(&mut board, to_move, 0, true);

            assert_eq!(pruned.score, exact, "board {:?}", snapshot.cells());
            assert_eq!(board, snapshot);

            let cell = pruned.cell.unwrap();
            board.place(cell, to_move).unwrap();
            let move_score = brute_force(&mut board, to_move, 1, false);
            assert_eq!(move_score, exact, "chosen cell {:?} is not optimal", cell);
        }
    }

    #[test]
    fn test_pruning_reduces_node_count() {
        let mut board = Board::new();
        let (_, stats) = best_move(&mut board, Player::First, Player::Second);

        // The unpruned tree from the empty board has 549_946 nodes.
        assert!(stats.nodes < 549_946);
        assert!(stats.cutoffs > 0);
    }

    #[test]
    fn test_same_board_same_cell() {
        let mut a = board_from_rows(["X  ", "   ", "   "]);
        let mut b = a.clone();
        let first = best_move(&mut a, Player::Second, Player::First).0;
        let second = best_move(&mut b, Player::Second, Player::First).0;
        assert_eq!(first, second);
    }

    #[test]
    fn test_mirrored_boards_use_row_major_tie_break() {
        // Mirror images, but the chosen cells are not reflections of each
        // other: ties go to the first optimal cell in row-major order.
        let mut left = board_from_rows(["X  ", " O ", " X "]);
        let mut right = board_from_rows(["  X", " O ", " X "]);

        let left_result = best_move(&mut left, Player::Second, Player::First).0;
        let right_result = best_move(&mut right, Player::Second, Player::First).0;

        assert_eq!(left_result.score, right_result.score);
        assert_eq!(left_result.cell, Some(Position::new(1, 0)));
        assert_eq!(right_result.cell, Some(Position::new(1, 0)));
    }
}

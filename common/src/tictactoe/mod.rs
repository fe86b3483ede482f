mod board;
mod bot_controller;
mod game_state;
mod search;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::choose_move;
pub use game_state::GameState;
pub use search::{
    ALPHA_INIT, BETA_INIT, SearchResult, SearchStats, WIN_SCORE, best_move, search,
    search_with_stats,
};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, Difficulty, Outcome, Player, Position, WinningLine,
};
pub use win_detector::{check_win_with_line, evaluate};

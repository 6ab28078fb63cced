mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BOT_MARK, HUMAN_MARK, best_move, best_move_scored, minimax};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, GameMode, GamePhase, Mark, Move, Outcome, WIN_LINES, WinLine};
pub use win_detector::{check_win, evaluate, winning_line};

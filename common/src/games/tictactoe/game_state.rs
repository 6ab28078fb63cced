use crate::log;
use super::board::Board;
use super::bot_controller::{BOT_MARK, best_move_scored};
use super::types::{GameMode, GamePhase, Mark, Move, Outcome, WinLine};
use super::win_detector::{evaluate, winning_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: Option<GameMode>,
    pub phase: GamePhase,
    pub current_mark: Mark,
    pub last_move: Option<Move>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: None,
            phase: GamePhase::Menu,
            current_mark: Mark::X,
            last_move: None,
        }
    }

    pub fn start(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.restart();
        log!("Game started in {:?} mode", mode);
    }

    pub fn restart(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.last_move = None;
        self.phase = GamePhase::InProgress;
    }

    pub fn back_to_menu(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.last_move = None;
        self.mode = None;
        self.phase = GamePhase::Menu;
        log!("Returned to menu");
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.phase != GamePhase::InProgress {
            return Err("Game is not in progress".to_string());
        }

        let mv = Move::new(index)?;

        if !self.board.is_empty_at(mv.index) {
            return Err("Cell is already marked".to_string());
        }

        self.board[mv.index] = self.current_mark;
        self.last_move = Some(mv);
        log!("{} placed on {}", self.current_mark, mv);

        self.check_game_over();

        if self.phase == GamePhase::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == Some(GameMode::VsComputer)
            && self.phase == GamePhase::InProgress
            && self.current_mark == BOT_MARK
    }

    /// Asks the oracle for O's reply and plays it.
    pub fn play_computer_turn(&mut self) -> Result<Move, String> {
        if !self.is_computer_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let mut scratch = self.board;
        let (mv, score) = best_move_scored(&mut scratch)
            .ok_or_else(|| "Computer found no move to play".to_string())?;
        log!("Computer chose {} with score {}", mv, score);

        self.place_mark(mv.index)?;
        Ok(mv)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self.phase {
            GamePhase::Won(_) => winning_line(&self.board),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::Menu => "Choose a game mode".to_string(),
            GamePhase::InProgress => format!("Player {}'s turn", self.current_mark),
            GamePhase::Won(mark) => format!("Player {} has won!", mark),
            GamePhase::Drawn => "It's a draw!".to_string(),
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        match evaluate(&self.board) {
            Outcome::XWins => self.phase = GamePhase::Won(Mark::X),
            Outcome::OWins => self.phase = GamePhase::Won(Mark::O),
            Outcome::Draw => self.phase = GamePhase::Drawn,
            Outcome::Ongoing => return,
        }
        log!("Game over: {}", self.status_text());
    }
}

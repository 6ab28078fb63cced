use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::{GamePhase, Move, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{ConsoleCommand, HELP_TEXT, parse_command};
use crate::config::TicTacToeConfig;
use crate::render::render_screen;

pub struct ConsoleRunner<W: Write> {
    state: TicTacToeGameState,
    settings: TicTacToeConfig,
    out: W,
}

impl<W: Write> ConsoleRunner<W> {
    pub fn new(state: TicTacToeGameState, settings: TicTacToeConfig, out: W) -> Self {
        Self { state, settings, out }
    }

    #[cfg(test)]
    fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }

    /// Runs until `q` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), String> {
        let mut lines = input.lines();
        self.show_screen()?;

        loop {
            if self.state.is_computer_turn() {
                let mv = self.play_computer_turn().await?;
                self.emit(&format!("Computer played {}", mv))?;
                self.show_screen()?;
                continue;
            }

            self.prompt()?;
            let line = lines
                .next_line()
                .await
                .map_err(|e| format!("Failed to read input: {}", e))?;
            let Some(line) = line else {
                log!("Input closed, leaving game");
                break;
            };

            match parse_command(&line) {
                Ok(ConsoleCommand::Quit) => break,
                Ok(command) => self.handle_command(command)?,
                Err(e) => self.emit(&format!("{}\n{}", e, HELP_TEXT))?,
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, command: ConsoleCommand) -> Result<(), String> {
        match command {
            ConsoleCommand::Place(index) => {
                if self.state.phase == GamePhase::Menu {
                    return self.emit("Choose a game mode first (p or c)");
                }
                if let Err(e) = self.state.place_mark(index) {
                    return self.emit(&e);
                }
            }
            ConsoleCommand::SelectMode(mode) => self.state.start(mode),
            ConsoleCommand::Restart => {
                if self.state.phase == GamePhase::Menu {
                    return self.emit("Nothing to restart, choose a game mode first");
                }
                self.state.restart();
            }
            ConsoleCommand::Menu => self.state.back_to_menu(),
            ConsoleCommand::Help => return self.emit(HELP_TEXT),
            ConsoleCommand::Quit => return Ok(()),
        }
        self.show_screen()
    }

    async fn play_computer_turn(&mut self) -> Result<Move, String> {
        tokio::time::sleep(Duration::from_millis(self.settings.computer_delay_ms)).await;

        let mut state = self.state.clone();
        let (state, mv) = tokio::task::spawn_blocking(move || {
            state.play_computer_turn().map(|mv| (state, mv))
        })
        .await
        .map_err(|e| format!("Computer move task failed: {}", e))??;

        self.state = state;
        Ok(mv)
    }

    fn show_screen(&mut self) -> Result<(), String> {
        let screen = render_screen(&self.state, self.settings.show_cell_numbers);
        self.emit(&format!("\n{}", screen))
    }

    fn prompt(&mut self) -> Result<(), String> {
        write!(self.out, "> ")
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }

    fn emit(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.out, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameMode, Mark};

    fn fast_settings() -> TicTacToeConfig {
        TicTacToeConfig {
            computer_delay_ms: 0,
            ..TicTacToeConfig::default()
        }
    }

    async fn run_script(script: &str) -> (TicTacToeGameState, String) {
        let mut runner = ConsoleRunner::new(TicTacToeGameState::new(), fast_settings(), Vec::new());
        runner.run(script.as_bytes()).await.unwrap();
        let state = runner.state().clone();
        let output = String::from_utf8(runner.into_output()).unwrap();
        (state, output)
    }

    #[tokio::test]
    async fn test_two_player_game_to_win() {
        let (state, output) = run_script("p\n1\n4\n2\n5\n3\n").await;
        assert_eq!(state.phase, GamePhase::Won(Mark::X));
        assert!(output.contains("Player X has won!"));
        assert!(output.contains("[X]|[X]|[X]"));
    }

    #[tokio::test]
    async fn test_computer_replies_after_human_move() {
        let (state, output) = run_script("c\n1\n").await;
        assert_eq!(state.mode, Some(GameMode::VsComputer));
        assert_eq!(state.board.count(Mark::X), 1);
        assert_eq!(state.board.count(Mark::O), 1);
        assert!(output.contains("Computer played"));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[tokio::test]
    async fn test_computer_blocks_in_console_game() {
        let (state, _) = run_script("c\n1\n2\n").await;
        assert_eq!(state.board[2], Mark::O);
    }

    #[tokio::test]
    async fn test_bad_input_prints_help_and_continues() {
        let (state, output) = run_script("banana\n5\np\n5\n5\nq\n").await;
        assert!(output.contains("Unknown command 'banana'"));
        assert!(output.contains("Choose a game mode first"));
        assert!(output.contains("Cell is already marked"));
        assert_eq!(state.board[4], Mark::X);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[tokio::test]
    async fn test_menu_and_restart_commands() {
        let (state, _) = run_script("p\n1\nr\n").await;
        assert_eq!(state.board.count(Mark::X), 0);
        assert_eq!(state.phase, GamePhase::InProgress);

        let (state, output) = run_script("r\np\n1\nm\n").await;
        assert!(output.contains("Nothing to restart"));
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.mode, None);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (state, _) = run_script("p\nq\n1\n").await;
        assert_eq!(state.board.count(Mark::X), 0);
    }
}

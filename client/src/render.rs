use common::games::tictactoe::{BOARD_SIZE, GameMode, GamePhase, Mark, TicTacToeGameState};

pub fn render_board(state: &TicTacToeGameState, show_cell_numbers: bool) -> String {
    let winning_line = state.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let symbol = match state.board[index] {
                    Mark::Empty if show_cell_numbers => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
                    Mark::Empty => ' ',
                    mark => mark.to_char(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_screen(state: &TicTacToeGameState, show_cell_numbers: bool) -> String {
    match state.phase {
        GamePhase::Menu => format!(
            "=== Tic-Tac-Toe ===\n{}\n  p) Player vs Player\n  c) Player vs Computer\n  q) Quit",
            state.status_text()
        ),
        _ => {
            let title = match state.mode {
                Some(GameMode::VsComputer) => "Mode: Player vs Computer",
                _ => "Mode: Player vs Player",
            };
            format!(
                "{}\n\n{}\n\n{}",
                title,
                render_board(state, show_cell_numbers),
                state.status_text()
            )
        }
    }
}

use super::board::Board;
use super::types::{Mark, Outcome, WIN_LINES, WinLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| board[line.cells[0]])
}

/// First line (rows, then columns, then diagonals) holding three equal marks.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.iter().copied().find(|line| {
        let [a, b, c] = line.cells;
        board[a] != Mark::Empty && board[a] == board[b] && board[a] == board[c]
    })
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::from_winner(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

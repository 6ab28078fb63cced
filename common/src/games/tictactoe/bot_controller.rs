use super::board::Board;
use super::types::{Mark, Move, Outcome};
use super::win_detector::evaluate;

/// The computer always plays O and maximizes.
pub const BOT_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

const WIN_SCORE: i32 = 10;

fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::OWins => Some(WIN_SCORE),
        Outcome::XWins => Some(-WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::Ongoing => None,
    }
}

/// Exhaustive minimax from O's point of view.
///
/// Terminal positions score `outcome - depth` for wins, losses and draws
/// alike. Every simulated mark is cleared before returning, so the board is
/// left as it was passed in.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(evaluate(board)) {
        return score - depth as i32;
    }

    let mark = if is_maximizing { BOT_MARK } else { HUMAN_MARK };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for mv in board.available_moves() {
        board[mv.index] = mark;
        let score = minimax(board, depth + 1, !is_maximizing);
        board[mv.index] = Mark::Empty;

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Optimal cell for O together with its minimax score.
///
/// Ties go to the lowest index. Returns `None` when the game is already
/// decided or no cell is free.
pub fn best_move_scored(board: &mut Board) -> Option<(Move, i32)> {
    if evaluate(board).is_terminal() {
        return None;
    }

    let mut best: Option<(Move, i32)> = None;

    for mv in board.available_moves() {
        board[mv.index] = BOT_MARK;
        let score = minimax(board, 0, false);
        board[mv.index] = Mark::Empty;

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best
}

pub fn best_move(board: &mut Board) -> Option<Move> {
    best_move_scored(board).map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("OO.XX....");
        assert_eq!(best_move_scored(&mut b), Some((Move { index: 2 }, 10)));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut b = board("XX..O....");
        assert_eq!(best_move(&mut b), Some(Move { index: 2 }));

        let mut b = board("X..X.O...");
        assert_eq!(best_move(&mut b), Some(Move { index: 6 }));
    }

    #[test]
    fn test_lost_position_prefers_the_quickest_loss() {
        // Blocking at 2 still loses to the fork at 4, and the uniform depth
        // penalty ranks the faster loss higher.
        let mut b = board("XX.O.....");
        assert_eq!(best_move_scored(&mut b), Some((Move { index: 4 }, -11)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(minimax(&mut b, 0, true), -9);
        assert_eq!(best_move_scored(&mut b), Some((Move { index: 0 }, -8)));
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_best_move_leaves_board_unchanged() {
        for s in ["X........", "X...O...X", "XO.X.O..X", "OO.XX...."] {
            let mut b = board(s);
            let before = b;
            best_move(&mut b);
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_no_move_on_terminal_or_full_board() {
        assert_eq!(best_move(&mut board("XOXXOOOXX")), None);
        assert_eq!(best_move(&mut board("XXX.OO...")), None);
        assert_eq!(best_move(&mut board("OOOXX.X..")), None);
    }

    #[test]
    fn test_terminal_scores_ignore_search_flag() {
        assert_eq!(minimax(&mut board("OOOXX.X.."), 0, true), 10);
        assert_eq!(minimax(&mut board("XXX.OO..."), 0, false), -10);
        assert_eq!(minimax(&mut board("XOXXOOOXX"), 3, true), -3);
        assert_eq!(minimax(&mut board("OOOXX.X.."), 2, false), 8);
    }

    #[test]
    fn test_mirrored_terminal_boards_negate() {
        for s in ["OOOXX.X..", "XXX.OO...", "X.OXO.XO.", "OXXXOOXOO"] {
            let b = board(s);
            for flag in [true, false] {
                let original = minimax(&mut b.clone(), 0, flag);
                let mirrored = minimax(&mut b.mirrored(), 0, !flag);
                assert_eq!(mirrored, -original, "board {}", s);
            }
        }
    }

    #[test]
    fn test_is_deterministic() {
        let mut b = board("X...O...X");
        let first = best_move_scored(&mut b);
        for _ in 0..3 {
            assert_eq!(best_move_scored(&mut b), first);
        }
    }

    fn assert_bot_never_loses(board: &mut Board, finished: &mut usize) {
        for mv in board.available_moves() {
            board[mv.index] = HUMAN_MARK;
            match evaluate(board) {
                Outcome::XWins => panic!("bot lost on board {}", board),
                Outcome::Ongoing => {
                    let reply = best_move(board).expect("ongoing board has a move");
                    board[reply.index] = BOT_MARK;
                    if evaluate(board).is_terminal() {
                        *finished += 1;
                    } else {
                        assert_bot_never_loses(board, finished);
                    }
                    board[reply.index] = Mark::Empty;
                }
                _ => *finished += 1,
            }
            board[mv.index] = Mark::Empty;
        }
    }

    #[test]
    fn test_bot_never_loses_against_any_opponent() {
        let mut b = Board::new();
        let mut finished = 0;
        assert_bot_never_loses(&mut b, &mut finished);
        assert_eq!(finished, 569);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_optimal_play_from_empty_board_draws() {
        let mut b = Board::new();
        let mut mark = BOT_MARK;
        while !evaluate(&b).is_terminal() {
            let mv = if mark == BOT_MARK {
                best_move(&mut b).unwrap()
            } else {
                let mut replies = b.available_moves();
                replies.sort_by_key(|reply| {
                    let mut next = b;
                    next[reply.index] = HUMAN_MARK;
                    minimax(&mut next, 0, true)
                });
                replies[0]
            };
            b[mv.index] = mark;
            mark = mark.opponent().unwrap();
        }
        assert_eq!(evaluate(&b), Outcome::Draw);
    }
}

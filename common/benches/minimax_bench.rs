use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{
    best_move, Board, GameMode, GamePhase, TicTacToeGameState,
};

fn bench_single_move_empty_board() {
    let mut board = Board::new();
    black_box(best_move(&mut board));
}

fn bench_single_move_mid_game() {
    let mut board: Board = "X...O...X".parse().unwrap_or_default();
    black_box(best_move(&mut board));
}

fn bench_full_game_vs_scripted_player() {
    let mut state = TicTacToeGameState::new();
    state.start(GameMode::VsComputer);

    for index in [4, 0, 8, 2, 6, 1, 3, 5, 7] {
        if state.phase != GamePhase::InProgress {
            break;
        }
        if state.place_mark(index).is_err() {
            continue;
        }
        if state.is_computer_turn() {
            let _ = state.play_computer_turn();
        }
    }
    black_box(state.phase);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_game_vs_scripted", |b| {
        b.iter(bench_full_game_vs_scripted_player)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

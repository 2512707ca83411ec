use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{check_win, Board, GameEngine, MoveAccepted, Player};

fn play_random_rounds(seed: u64, rounds: u32) -> u32 {
    let mut engine = GameEngine::with_picker(SessionRng::new(seed));
    let mut moves = SessionRng::new(seed ^ 0x5eed);
    let mut finished = 0;

    while finished < rounds {
        let empty = engine.board().empty_positions();
        let pos = empty[moves.random_range(0..empty.len())];
        if let Ok(MoveAccepted::RoundEnded(_)) = engine.apply_move(pos.row, pos.col) {
            finished += 1;
        }
    }

    engine.scores().wins(Player::X)
}

fn bench_random_rounds(c: &mut Criterion) {
    c.bench_function("play 100 random rounds", |b| {
        b.iter(|| play_random_rounds(black_box(42), black_box(100)))
    });
}

fn bench_check_win_mid_game(c: &mut Criterion) {
    let mut board = Board::new();
    for (row, col, player) in [(0, 0, Player::X), (1, 1, Player::O), (2, 2, Player::X), (0, 2, Player::O)] {
        board.place(row, col, player).unwrap();
    }

    c.bench_function("check_win mid game", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

criterion_group!(benches, bench_random_rounds, bench_check_win_mid_game);
criterion_main!(benches);

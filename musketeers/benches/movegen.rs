use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use musketeers::board::Board;
use rand::seq::SliceRandom;

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let board = Board::new();
    criterion.bench_function("gen moves", |b| {
        b.iter(|| black_box(board.legal_moves()));
    });
    criterion.bench_function("playout", |b| {
        b.iter(|| {
            let mut board = board.clone();
            while !board.is_game_over() {
                let moves = board.legal_moves();
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                board.play(*mv);
            }
            black_box(board)
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_rps::{Move, RoundEngine, SeededMoves};

fn full_game(c: &mut Criterion) {
    c.bench_function("five_round_game", |b| {
        let mut engine = RoundEngine::with_source(SeededMoves::new(42));
        b.iter(|| {
            engine.reset();
            for mv in [Move::Rock, Move::Paper, Move::Scissors, Move::Rock, Move::Paper] {
                black_box(engine.play_round(black_box(mv)).unwrap());
            }
            black_box(engine.final_result().unwrap())
        })
    });
}

criterion_group!(benches, full_game);
criterion_main!(benches);

use ladders_game_types::config_fixture;
use ladders_game_types::engine::GameSession;
use ladders_game_types::types::{TurnInstruments, VictorDeterminableGame};
use rand::{rngs::SmallRng, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

#[derive(Debug)]
struct Instruments {}

impl TurnInstruments for Instruments {
    fn observe_turn(&self, _: std::time::Duration) {}
}

fn play_till_end(b: &mut Bencher, fixture: &str) {
    let config = config_fixture(fixture);
    let players = vec![("ana", "red"), ("bo", "blue"), ("cy", "green"), ("di", "gold")];
    let instruments = Instruments {};
    let mut dice_rng = SmallRng::seed_from_u64(0);

    b.iter(|| {
        let mut session = GameSession::with_rng(
            players.clone(),
            config.clone(),
            SmallRng::seed_from_u64(1),
        )
        .unwrap();
        let die = config.die;
        while !session.is_over() {
            let roll = die.sample(&mut dice_rng);
            black_box(
                session
                    .roll_and_move_instrumented(&instruments, roll)
                    .unwrap(),
            );
        }
        session
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("FullGames");
    g.bench_function("classic snakes and ladders, 4 players", |b| {
        play_till_end(
            b,
            include_str!("../fixtures/classic_snakes_and_ladders.json"),
        )
    });
    g.bench_function("ladders only, clamp on overshoot, 4 players", |b| {
        play_till_end(b, include_str!("../fixtures/ladders_clamp.json"))
    });
    g.bench_function("reverse die with chained links, 4 players", |b| {
        play_till_end(b, include_str!("../fixtures/reverse_die_chained.json"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
